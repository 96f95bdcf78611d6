//! 认证模块
//!
//! - `SessionContext`: 通过 Context 共享的会话上下文，Token 变化时同步到信号
//! - `login` / `register` / `logout`: 认证流程，返回下一步要前往的路由
//!
//! 路由服务只依赖注入的认证信号，与本模块解耦。

use leptos::prelude::*;

use crate::api::KodigoApi;
use crate::config::AppConfig;
use crate::forms::{FieldErrors, LoginForm, RegisterForm};
use crate::session::{Session, TokenStore};
use crate::web::route::AppRoute;
use crate::web::{BrowserStorage, HttpClient};

/// 登录失败且服务端未给出消息时的提示
pub const LOGIN_SERVER_FALLBACK: &str = "Error en el servidor";
/// 注册失败且服务端未给出消息时的提示
pub const REGISTER_FALLBACK: &str = "Error en el registro. Inténtalo de nuevo.";
pub const REGISTER_SUCCESS: &str = "¡Registro exitoso! Ahora puedes iniciar sesión.";

/// 认证流程错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// 本地校验失败，没有发出请求
    Invalid(FieldErrors),
    /// 请求失败，附带界面提示
    Failed(String),
}

/// 登录
///
/// 校验通过后发出一次请求；成功时保存 Token 并返回控制面板路由。
pub async fn login<C: HttpClient, S: TokenStore>(
    api: &KodigoApi<C>,
    session: &Session<S>,
    form: &LoginForm,
) -> Result<AppRoute, AuthError> {
    let credentials = form.validate().map_err(AuthError::Invalid)?;

    match api.login(credentials).await {
        Ok(token) => {
            session.sign_in(&token);
            log::info!("[Auth] login succeeded");
            Ok(AppRoute::Dashboard)
        }
        Err(e) => {
            log::error!("[Auth] login failed: {}", e);
            Err(AuthError::Failed(e.user_message(LOGIN_SERVER_FALLBACK)))
        }
    }
}

/// 注册，成功后返回登录路由（注册不签发 Token）
pub async fn register<C: HttpClient>(
    api: &KodigoApi<C>,
    form: &RegisterForm,
) -> Result<AppRoute, AuthError> {
    let credentials = form.validate().map_err(AuthError::Invalid)?;

    match api.register(credentials).await {
        Ok(()) => Ok(AppRoute::Login),
        Err(e) => {
            log::error!("[Auth] register failed: {}", e);
            // 注册页只区分服务端消息与通用提示
            let message = match e {
                crate::error::ApiError::Server {
                    message: Some(message),
                    ..
                } if !message.trim().is_empty() => message,
                _ => REGISTER_FALLBACK.to_string(),
            };
            Err(AuthError::Failed(message))
        }
    }
}

/// 注册成功后的延迟跳转
///
/// 只有用户仍停留在注册页时才跳转，否则返回 `None`。
pub fn follow_up_after_register(current: AppRoute, next: AppRoute) -> Option<AppRoute> {
    (current == AppRoute::Register).then_some(next)
}

/// 注销，返回登录路由
pub fn logout<S: TokenStore>(session: &Session<S>) -> AppRoute {
    session.sign_out();
    AppRoute::Login
}

// =========================================================
// 会话上下文 (Leptos Context)
// =========================================================

/// 会话上下文
///
/// `Session` 保存在本地 arena 中，Token 信号由 `Session` 的订阅回调维护。
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: StoredValue<Session<BrowserStorage>, LocalStorage>,
    token: RwSignal<Option<String>>,
    config: StoredValue<AppConfig>,
}

impl SessionContext {
    pub fn new(config: AppConfig) -> Self {
        let mut session = Session::new(BrowserStorage);
        let token = bind_token(&mut session);

        Self {
            session: StoredValue::new_local(session),
            token,
            config: StoredValue::new(config),
        }
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        authenticated(self.token)
    }

    pub fn session(&self) -> Session<BrowserStorage> {
        self.session.get_value()
    }

    /// 使用当前 Token 构造 API 客户端
    pub fn api(&self) -> KodigoApi {
        let base_url = self.config.with_value(|c| c.api_base_url.clone());
        KodigoApi::new(&base_url, self.token.get_untracked())
    }
}

/// 创建与会话同步的 Token 信号
fn bind_token<S: TokenStore>(session: &mut Session<S>) -> RwSignal<Option<String>> {
    let token = RwSignal::new(session.token());
    session.subscribe(move |t| token.set(t.map(str::to_string)));
    token
}

fn authenticated(token: RwSignal<Option<String>>) -> Signal<bool> {
    Signal::derive(move || token.with(Option::is_some))
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
