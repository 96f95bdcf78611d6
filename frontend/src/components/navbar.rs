use crate::auth::{logout, use_session};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

/// 导航栏条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Link(AppRoute, &'static str),
    Logout,
}

/// 根据认证状态计算导航栏条目
///
/// 未登录：首页、注册、登录；已登录：首页、控制面板、注销按钮。
pub fn nav_items(is_authenticated: bool) -> Vec<NavItem> {
    let mut items = vec![NavItem::Link(AppRoute::Landing, "Inicio")];
    if is_authenticated {
        items.push(NavItem::Link(AppRoute::Dashboard, "Dashboard"));
        items.push(NavItem::Logout);
    } else {
        items.push(NavItem::Link(AppRoute::Register, "Registro"));
        items.push(NavItem::Link(AppRoute::Login, "Login"));
    }
    items
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session_ctx = use_session();
    let router = use_router();
    let is_authenticated = session_ctx.is_authenticated_signal();

    let on_logout = move |_| {
        let next = logout(&session_ctx.session());
        router.navigate_to(next);
    };

    view! {
        <div class="navbar bg-neutral text-neutral-content fixed top-0 z-40 shadow-lg">
            <div class="flex-1">
                <Link to=AppRoute::Landing class="btn btn-ghost text-xl">"Kodigo App"</Link>
            </div>
            <ul class="menu menu-horizontal px-1 gap-1 items-center">
                {move || {
                    nav_items(is_authenticated.get())
                        .into_iter()
                        .map(|item| match item {
                            NavItem::Link(route, label) => view! {
                                <li><Link to=route>{label}</Link></li>
                            }
                            .into_any(),
                            NavItem::Logout => view! {
                                <li>
                                    <button class="btn btn-outline btn-sm ml-2" on:click=on_logout>
                                        "Cerrar sesión"
                                    </button>
                                </li>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
