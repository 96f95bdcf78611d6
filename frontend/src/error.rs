//! 错误类型模块
//!
//! - `HttpError`: 传输层错误（请求无法发出或没有收到响应）
//! - `ApiError`: API 客户端错误，对应界面上的三类远端失败

use thiserror::Error;

/// 无法连接服务器时的固定提示
pub const CONNECTIVITY_MESSAGE: &str =
    "No se pudo conectar al servidor. Verifica tu conexión a internet.";
/// 未预期错误的固定提示
pub const GENERIC_MESSAGE: &str = "Ocurrió un error inesperado. Intenta de nuevo.";

/// HTTP 传输层错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// 请求构建失败
    #[error("请求构建失败: {0}")]
    RequestBuildFailed(String),
    /// 网络请求失败（没有收到任何响应）
    #[error("网络错误: {0}")]
    Network(String),
    /// 响应体读取失败
    #[error("响应读取失败: {0}")]
    ResponseReadFailed(String),
}

/// API 调用错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 服务端返回了非 2xx 响应
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("sin mensaje"))]
    Server {
        status: u16,
        message: Option<String>,
    },
    /// 没有收到响应
    #[error("网络错误: {0}")]
    Network(String),
    /// 其它错误（请求构建失败、响应无法解析等）
    #[error("未预期错误: {0}")]
    Unexpected(String),
}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::Network(msg) => ApiError::Network(msg),
            other => ApiError::Unexpected(other.to_string()),
        }
    }
}

impl ApiError {
    /// 转换为界面提示
    ///
    /// 服务端消息原样展示；服务端未给出消息时使用 `server_fallback`；
    /// 网络错误和其它错误使用固定提示。
    pub fn user_message(&self, server_fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Server { .. } => server_fallback.to_string(),
            ApiError::Network(_) => CONNECTIVITY_MESSAGE.to_string(),
            ApiError::Unexpected(_) => GENERIC_MESSAGE.to_string(),
        }
    }
}
