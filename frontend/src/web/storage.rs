//! LocalStorage 封装模块
//!
//! 基于 `gloo-storage`，提供简洁的本地存储接口。
//! 存储失败只记录日志：本地存储在此应用中视为不会失败。

use gloo_storage::{LocalStorage, Storage};

use crate::session::TokenStore;
use kodigo_shared::STORAGE_TOKEN_KEY;

/// 浏览器 LocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// 获取存储的字符串值
    ///
    /// 直接读取原始字符串，不做 JSON 解析；键不存在或发生错误时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    /// 设置存储值（原始字符串）
    pub fn set(key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            log::warn!("[Storage] set {} failed: {:?}", key, e);
        }
    }

    /// 删除存储的键值对
    pub fn delete(key: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            log::warn!("[Storage] delete {} failed: {:?}", key, e);
        }
    }
}

impl TokenStore for BrowserStorage {
    fn get_token(&self) -> Option<String> {
        Self::get(STORAGE_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) {
        Self::set(STORAGE_TOKEN_KEY, token);
    }

    fn clear_token(&self) {
        Self::delete(STORAGE_TOKEN_KEY);
    }
}
