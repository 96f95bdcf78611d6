//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由以及认证守卫规则。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Landing,
    /// 注册页面
    Register,
    /// 登录页面
    Login,
    /// 控制面板 (需要认证)
    Dashboard,
    /// 页面未找到
    NotFound,
}

/// 守卫的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 放行
    Allow(AppRoute),
    /// 重定向到其它路由
    Redirect(AppRoute),
}

impl Resolution {
    pub fn route(&self) -> AppRoute {
        match self {
            Resolution::Allow(route) | Resolution::Redirect(route) => *route,
        }
    }
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" => Self::Landing,
            "/register" => Self::Register,
            "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Register => "/register",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::NotFound => "/404",
        }
    }

    /// 该路由是否需要认证
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// 已认证用户是否应该离开此路由
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 已认证时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// **核心守卫逻辑**
    ///
    /// 每次导航、popstate 以及会话变化时都会重新求值。
    pub fn resolve(self, is_authenticated: bool) -> Resolution {
        if self.requires_auth() && !is_authenticated {
            Resolution::Redirect(Self::auth_failure_redirect())
        } else if self.should_redirect_when_authenticated() && is_authenticated {
            Resolution::Redirect(Self::auth_success_redirect())
        } else {
            Resolution::Allow(self)
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Landing);
        assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
        assert_eq!(AppRoute::from_path("/login/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/about"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/dashboard/1"), AppRoute::NotFound);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in [
            AppRoute::Landing,
            AppRoute::Register,
            AppRoute::Login,
            AppRoute::Dashboard,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn test_guard_anonymous() {
        assert_eq!(
            AppRoute::Dashboard.resolve(false),
            Resolution::Redirect(AppRoute::Login)
        );
        assert_eq!(
            AppRoute::Login.resolve(false),
            Resolution::Allow(AppRoute::Login)
        );
        assert_eq!(
            AppRoute::Landing.resolve(false),
            Resolution::Allow(AppRoute::Landing)
        );
    }

    #[test]
    fn test_guard_authenticated() {
        assert_eq!(
            AppRoute::Dashboard.resolve(true),
            Resolution::Allow(AppRoute::Dashboard)
        );
        assert_eq!(
            AppRoute::Login.resolve(true).route(),
            AppRoute::Dashboard
        );
        assert_eq!(
            AppRoute::Register.resolve(true),
            Resolution::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(
            AppRoute::Landing.resolve(true),
            Resolution::Allow(AppRoute::Landing)
        );
    }
}
