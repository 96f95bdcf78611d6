use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 会话 Token 在 LocalStorage 中的键
pub const STORAGE_TOKEN_KEY: &str = "token";
/// 运行时覆盖 API 地址的 LocalStorage 键
pub const STORAGE_API_URL_KEY: &str = "kodigo_api_url";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

fn default_active() -> bool {
    true
}

/// Bootcamp 记录
///
/// 由远端 API 持有，客户端只保存一次拉取得到的快照。
/// `active = false` 表示已被软删除（停用）。
///
/// 反序列化时同时接受 `_id` 与 `id`（字符串或数字），优先使用非空的 `_id`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBootcamp")]
pub struct Bootcamp {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub active: bool,
}

/// 服务端返回的记录 ID，可能是字符串也可能是数字
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl RecordId {
    fn into_string(self) -> String {
        match self {
            RecordId::Text(s) => s,
            RecordId::Integer(n) => n.to_string(),
            RecordId::Float(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RawBootcamp {
    #[serde(rename = "_id", default)]
    mongo_id: Option<RecordId>,
    #[serde(default)]
    id: Option<RecordId>,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    technologies: Vec<String>,
    #[serde(default = "default_active")]
    active: bool,
}

impl From<RawBootcamp> for Bootcamp {
    fn from(raw: RawBootcamp) -> Self {
        let id = [raw.mongo_id, raw.id]
            .into_iter()
            .flatten()
            .map(RecordId::into_string)
            .find(|id| !id.is_empty())
            .unwrap_or_default();

        Self {
            id,
            name: raw.name,
            description: raw.description,
            technologies: raw.technologies,
            active: raw.active,
        }
    }
}

/// 创建 / 更新 Bootcamp 的请求体
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BootcampPayload {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

impl From<&Bootcamp> for BootcampPayload {
    fn from(record: &Bootcamp) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            technologies: record.technologies.clone(),
        }
    }
}

/// 登录 / 注册凭据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// 列表接口的两种返回形态：裸数组，或 `{ "bootcamps": [...] }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BootcampList {
    Plain(Vec<Bootcamp>),
    Wrapped {
        #[serde(default)]
        bootcamps: Vec<Bootcamp>,
    },
}

impl From<BootcampList> for Vec<Bootcamp> {
    fn from(list: BootcampList) -> Self {
        match list {
            BootcampList::Plain(items) => items,
            BootcampList::Wrapped { bootcamps } => bootcamps,
        }
    }
}

/// 服务端错误响应体，只关心 `message` 字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =========================================================
// 技术栈列表 (Technologies)
// =========================================================

/// 解析逗号分隔的技术列表：切分、去空白、丢弃空项
pub fn parse_technologies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 将技术列表还原为表单中的文本
pub fn join_technologies(technologies: &[String]) -> String {
    technologies.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_technologies_trims_and_drops_empty() {
        assert_eq!(
            parse_technologies("HTML, CSS , React"),
            vec!["HTML", "CSS", "React"]
        );
        assert_eq!(parse_technologies(" , Rust,,  ,Go "), vec!["Rust", "Go"]);
        assert!(parse_technologies("").is_empty());
        assert!(parse_technologies("   ").is_empty());
    }

    #[test]
    fn test_join_technologies() {
        let techs = vec!["HTML".to_string(), "CSS".to_string()];
        assert_eq!(join_technologies(&techs), "HTML, CSS");
        assert_eq!(parse_technologies(&join_technologies(&techs)), techs);
    }

    #[test]
    fn test_bootcamp_accepts_mongo_id_and_defaults() {
        let record: Bootcamp = serde_json::from_value(json!({
            "_id": "65a1",
            "name": "Full Stack Junior"
        }))
        .unwrap();

        assert_eq!(record.id, "65a1");
        assert!(record.active);
        assert!(record.technologies.is_empty());
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_bootcamp_id_variants() {
        let both: Bootcamp = serde_json::from_value(json!({
            "_id": "65a1",
            "id": "65a1-virtual",
            "name": "A"
        }))
        .unwrap();
        assert_eq!(both.id, "65a1");

        let numeric: Bootcamp = serde_json::from_value(json!({ "id": 1, "name": "A" })).unwrap();
        assert_eq!(numeric.id, "1");

        let empty_mongo: Bootcamp =
            serde_json::from_value(json!({ "_id": "", "id": 7, "name": "A" })).unwrap();
        assert_eq!(empty_mongo.id, "7");

        let list: BootcampList = serde_json::from_value(json!([
            { "_id": "65a1", "id": "65a1", "name": "A" },
            { "id": 2, "name": "B" }
        ]))
        .unwrap();
        let ids: Vec<String> = Vec::<Bootcamp>::from(list)
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec!["65a1", "2"]);
    }

    #[test]
    fn test_bootcamp_list_shapes() {
        let plain: BootcampList = serde_json::from_value(json!([
            { "id": "1", "name": "A", "active": false }
        ]))
        .unwrap();
        let plain: Vec<Bootcamp> = plain.into();
        assert_eq!(plain.len(), 1);
        assert!(!plain[0].active);

        let wrapped: BootcampList = serde_json::from_value(json!({
            "bootcamps": [{ "id": "1", "name": "A" }, { "id": "2", "name": "B" }]
        }))
        .unwrap();
        assert_eq!(Vec::<Bootcamp>::from(wrapped).len(), 2);

        let other: BootcampList = serde_json::from_value(json!({ "ok": true })).unwrap();
        assert!(Vec::<Bootcamp>::from(other).is_empty());
    }

    #[test]
    fn test_payload_from_record() {
        let record = Bootcamp {
            id: "7".into(),
            name: "Data".into(),
            description: "Python".into(),
            technologies: vec!["Python".into(), "SQL".into()],
            active: true,
        };
        let payload = BootcampPayload::from(&record);
        assert_eq!(payload.name, "Data");
        assert_eq!(payload.technologies, record.technologies);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({ "name": "Data", "description": "Python", "technologies": ["Python", "SQL"] })
        );
    }
}
