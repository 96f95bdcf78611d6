//! Kodigo 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `web::route`: 路由定义与守卫（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session` / `auth`: 会话状态与认证流程
//! - `api` / `bootcamps`: 远端 API 调用与控制面板数据流
//! - `components`: UI 组件层

mod api;
mod auth;
mod bootcamps;
mod components {
    mod bootcamp_card;
    mod bootcamp_form;
    pub mod dashboard;
    pub mod landing;
    pub mod login;
    pub mod navbar;
    pub mod register;
}
pub mod config;
mod error;
mod forms;
mod session;

use crate::auth::SessionContext;
use crate::components::dashboard::DashboardPage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::register::RegisterPage;
use crate::config::AppConfig;

use leptos::prelude::*;

// 浏览器 API 封装：fetch、LocalStorage、History
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    #[cfg(test)]
    pub use http::MockHttpClient;
    pub use http::{FetchHttpClient, HttpClient, HttpRequest};
    pub use storage::BrowserStorage;
}

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Página no encontrada"</p>
                    <Link to=AppRoute::Landing class="btn btn-link mt-4">"Volver al inicio"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话上下文：从 LocalStorage 加载 Token
    let session_ctx = SessionContext::new(AppConfig::load());
    provide_context(session_ctx);

    // 2. 认证信号注入路由服务
    let is_authenticated = session_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <Navbar />
            <main class="pt-16">
                <RouterOutlet matcher=route_matcher />
            </main>
        </Router>
    }
}
