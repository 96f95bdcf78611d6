use kodigo_shared::protocol::{
    ApiRequest, CreateBootcampRequest, DeactivateBootcampRequest, ListBootcampsRequest,
    LoginRequest, RegisterRequest, UpdateBootcampRequest,
};
use kodigo_shared::{Bootcamp, BootcampPayload, Credentials, ErrorBody, HEADER_AUTHORIZATION};

use crate::error::ApiError;
use crate::web::{FetchHttpClient, HttpClient, HttpRequest};

/// 远端 API 客户端
///
/// 无状态：Token 在构造时注入，会话变化后重新构造即可。
#[derive(Clone, Debug, PartialEq)]
pub struct KodigoApi<C = FetchHttpClient> {
    base_url: String,
    token: Option<String>,
    client: C,
}

impl KodigoApi<FetchHttpClient> {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self::with_client(base_url, token, FetchHttpClient)
    }
}

impl<C: HttpClient> KodigoApi<C> {
    pub fn with_client(base_url: &str, token: Option<String>, client: C) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送一个类型化请求
    ///
    /// 需要认证的请求附带 `Authorization: Bearer <token>`；没有 Token 时照常发送，
    /// 由服务端拒绝。
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let mut req = HttpRequest::new(&self.url(&request.path()), R::METHOD)
            .with_header("Accept", "application/json");

        if R::AUTHENTICATED {
            if let Some(token) = &self.token {
                req = req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
            }
        }

        if let Some(body) = request.body() {
            let json =
                serde_json::to_string(body).map_err(|e| ApiError::Unexpected(e.to_string()))?;
            req = req
                .with_header("Content-Type", "application/json")
                .with_body(json);
        }

        let res = self.client.send(req).await?;

        if !res.ok() {
            let message = serde_json::from_str::<ErrorBody>(&res.body)
                .ok()
                .and_then(|b| b.message);
            log::warn!(
                "[Api] {} {} -> {}",
                R::METHOD.as_str(),
                request.path(),
                res.status
            );
            return Err(ApiError::Server {
                status: res.status,
                message,
            });
        }

        // 204 或空响应体按 null 解析
        let body = if res.body.trim().is_empty() {
            "null"
        } else {
            res.body.as_str()
        };
        serde_json::from_str(body).map_err(|e| ApiError::Unexpected(e.to_string()))
    }

    /// 登录，返回会话 Token
    pub async fn login(&self, credentials: Credentials) -> Result<String, ApiError> {
        let res = self.send(&LoginRequest(credentials)).await?;
        Ok(res.token)
    }

    /// 注册
    pub async fn register(&self, credentials: Credentials) -> Result<(), ApiError> {
        self.send(&RegisterRequest(credentials)).await?;
        Ok(())
    }

    /// 获取全部 Bootcamp
    pub async fn list_bootcamps(&self) -> Result<Vec<Bootcamp>, ApiError> {
        let list = self.send(&ListBootcampsRequest).await?;
        Ok(list.into())
    }

    pub async fn create_bootcamp(&self, payload: BootcampPayload) -> Result<(), ApiError> {
        self.send(&CreateBootcampRequest(payload)).await?;
        Ok(())
    }

    pub async fn update_bootcamp(&self, id: &str, payload: BootcampPayload) -> Result<(), ApiError> {
        self.send(&UpdateBootcampRequest {
            id: id.to_string(),
            payload,
        })
        .await?;
        Ok(())
    }

    /// 停用（软删除）
    pub async fn deactivate_bootcamp(&self, id: &str) -> Result<(), ApiError> {
        self.send(&DeactivateBootcampRequest { id: id.to_string() })
            .await?;
        Ok(())
    }
}
