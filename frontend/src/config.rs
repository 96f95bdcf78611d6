//! 运行时配置
//!
//! API 地址在编译期由 `KODIGO_API_URL` 注入（`trunk build` 前 export 即可），
//! 也可以在浏览器 LocalStorage 的 `kodigo_api_url` 中临时覆盖，方便联调。

use crate::web::BrowserStorage;
use kodigo_shared::STORAGE_API_URL_KEY;

/// 默认 API 地址
pub const DEFAULT_API_URL: &str = match option_env!("KODIGO_API_URL") {
    Some(url) => url,
    None => "http://localhost:4000/api",
};

/// 通知自动消失的时间（毫秒）
pub const NOTICE_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// 合并编译期默认值与可选的覆盖值
    pub fn resolve(override_url: Option<String>) -> Self {
        let url = override_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_base_url: url.trim_end_matches('/').to_string(),
        }
    }

    /// 从浏览器环境加载
    pub fn load() -> Self {
        let config = Self::resolve(BrowserStorage::get(STORAGE_API_URL_KEY));
        log::info!("[Config] API base url: {}", config.api_base_url);
        config
    }
}
