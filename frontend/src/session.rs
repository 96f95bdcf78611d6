//! 会话状态模块
//!
//! 会话只是一个不透明的 Token：存在即视为已登录，不做校验、解析或刷新。
//! `Session` 在持久化之外提供变更订阅，界面层通过订阅同步信号，
//! 而不是各自重复读取存储。

use std::rc::Rc;

/// Token 持久化接口
pub trait TokenStore {
    fn get_token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);
}

type Listener = Rc<dyn Fn(Option<&str>)>;

/// 会话
///
/// 克隆后共享同一组订阅者。
#[derive(Clone)]
pub struct Session<S: TokenStore> {
    store: S,
    listeners: Vec<Listener>,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            listeners: Vec::new(),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get_token()
    }

    /// 订阅会话变更，回调参数为新的 Token
    pub fn subscribe(&mut self, listener: impl Fn(Option<&str>) + 'static) {
        self.listeners.push(Rc::new(listener));
    }

    /// 保存登录得到的 Token 并通知订阅者
    pub fn sign_in(&self, token: &str) {
        self.store.set_token(token);
        log::info!("[Session] token stored");
        self.notify(Some(token));
    }

    /// 清除 Token 并通知订阅者
    pub fn sign_out(&self) {
        self.store.clear_token();
        log::info!("[Session] token cleared");
        self.notify(None);
    }

    fn notify(&self, token: Option<&str>) {
        for listener in &self.listeners {
            listener(token);
        }
    }
}

// =========================================================
// 测试工具: 内存存储
// =========================================================

#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<std::cell::RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.set_token(token);
        store
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.token.borrow_mut() = None;
    }
}
