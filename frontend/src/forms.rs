//! 表单校验模块
//!
//! 所有校验都在本地完成，失败时阻止提交，错误按字段展示。

use kodigo_shared::{Bootcamp, BootcampPayload, Credentials, join_technologies, parse_technologies};

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Name,
    Description,
}

/// 字段级错误集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, String)>);

impl FieldErrors {
    fn push(&mut self, field: Field, message: &str) {
        self.0.push((field, message.to_string()));
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 6;

fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.is_empty() {
        errors.push(Field::Password, "La contraseña es requerida");
    } else if password.chars().count() < PASSWORD_MIN {
        errors.push(
            Field::Password,
            "La contraseña debe tener al menos 6 caracteres",
        );
    }
}

/// 登录表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// 用户名：必填、3-50 个字符、只允许字母数字和下划线；密码：至少 6 个字符
    ///
    /// 只有必填检查忽略首尾空白，长度和字符检查针对原始输入。
    /// 提交时发送去掉空白后的用户名。
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::default();
        let raw = self.username.as_str();
        let len = raw.chars().count();

        if raw.trim().is_empty() {
            errors.push(Field::Username, "El nombre de usuario es requerido");
        } else if len < USERNAME_MIN {
            errors.push(
                Field::Username,
                "El nombre de usuario debe tener al menos 3 caracteres",
            );
        } else if len > USERNAME_MAX {
            errors.push(
                Field::Username,
                "El nombre de usuario no puede exceder 50 caracteres",
            );
        } else if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            errors.push(
                Field::Username,
                "El nombre de usuario solo puede contener letras, números y guiones bajos",
            );
        }

        check_password(&mut errors, &self.password);

        errors.into_result(Credentials {
            username: raw.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// 注册表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

impl RegisterForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.username.trim().is_empty() {
            errors.push(Field::Username, "El nombre de usuario es obligatorio");
        }
        check_password(&mut errors, &self.password);

        errors.into_result(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

/// Bootcamp 表单（创建和编辑共用）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootcampForm {
    pub name: String,
    pub description: String,
    /// 逗号分隔的技术列表
    pub technologies: String,
}

impl BootcampForm {
    /// 用已有记录预填编辑表单
    pub fn from_record(record: &Bootcamp) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            technologies: join_technologies(&record.technologies),
        }
    }

    pub fn validate(&self) -> Result<BootcampPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.push(Field::Name, "El nombre es obligatorio");
        }
        if self.description.trim().is_empty() {
            errors.push(Field::Description, "La descripción es obligatoria");
        }

        errors.into_result(BootcampPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            technologies: parse_technologies(&self.technologies),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_username_rules() {
        let short = LoginForm::new("ab", "secret1").validate().unwrap_err();
        assert!(short.get(Field::Username).unwrap().contains("al menos 3"));
        assert!(short.get(Field::Password).is_none());

        let long = LoginForm::new("a".repeat(51), "secret1").validate().unwrap_err();
        assert!(long.get(Field::Username).unwrap().contains("50"));

        let symbols = LoginForm::new("ada-l", "secret1").validate().unwrap_err();
        assert!(symbols.get(Field::Username).unwrap().contains("guiones bajos"));

        let empty = LoginForm::new("   ", "secret1").validate().unwrap_err();
        assert_eq!(
            empty.get(Field::Username),
            Some("El nombre de usuario es requerido")
        );
    }

    #[test]
    fn test_login_password_rules() {
        let missing = LoginForm::new("ada_l", "").validate().unwrap_err();
        assert_eq!(missing.get(Field::Password), Some("La contraseña es requerida"));

        let short = LoginForm::new("ada_l", "12345").validate().unwrap_err();
        assert!(short.get(Field::Password).unwrap().contains("6 caracteres"));
    }

    #[test]
    fn test_login_checks_untrimmed_username() {
        let padded = LoginForm::new(" ada_l", "secret1").validate().unwrap_err();
        assert!(padded.get(Field::Username).unwrap().contains("guiones bajos"));

        // 空白计入长度
        let short = LoginForm::new(" ab", "secret1").validate().unwrap_err();
        assert!(short.get(Field::Username).unwrap().contains("guiones bajos"));

        let creds = LoginForm::new("ada_l", "secret1").validate().unwrap();
        assert_eq!(creds.username, "ada_l");
        assert_eq!(creds.password, "secret1");
    }

    #[test]
    fn test_register_rules() {
        assert!(RegisterForm::new("x", "123456").validate().is_ok());

        let errors = RegisterForm::new("", "123").validate().unwrap_err();
        assert!(errors.get(Field::Username).is_some());
        assert!(errors.get(Field::Password).is_some());
    }

    #[test]
    fn test_bootcamp_form_payload() {
        let form = BootcampForm {
            name: "Full Stack Junior".into(),
            description: "Programa intensivo".into(),
            technologies: "HTML, CSS , React".into(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.technologies, vec!["HTML", "CSS", "React"]);

        let empty = BootcampForm::default().validate().unwrap_err();
        assert!(empty.get(Field::Name).is_some());
        assert!(empty.get(Field::Description).is_some());
    }

    #[test]
    fn test_bootcamp_form_from_record() {
        let record = Bootcamp {
            id: "1".into(),
            name: "Java".into(),
            description: "Backend".into(),
            technologies: vec!["Java".into(), "Spring".into()],
            active: true,
        };
        let form = BootcampForm::from_record(&record);
        assert_eq!(form.technologies, "Java, Spring");
        assert_eq!(form.validate().unwrap(), BootcampPayload::from(&record));
    }
}
