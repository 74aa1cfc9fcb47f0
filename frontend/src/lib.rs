//! Folio Dash 前端应用
//!
//! 采用 Context-Driven 的组织方式：
//! - `web::route`: 路由定义与守卫
//! - `web::router`: 基于 History API 的路由服务
//! - `auth`: 会话状态
//! - `components`: 页面与 UI 组件

mod api;
mod auth;
mod styles;
mod theme;
mod components {
    pub mod dashboard;
    mod header;
    mod icons;
    mod layout;
    pub mod login;
    pub mod messages;
    mod notification;
    mod project_form;
    pub mod projects;
    mod sidebar;
}

use crate::api::ProjectsRefresh;
use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::messages::MessagesPage;
use crate::components::projects::ProjectsPage;
use crate::theme::ThemeContext;

use leptos::prelude::*;

// 浏览器 API 封装
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::FetchClient;
    pub use storage::LocalStorage;
    pub use timer::run_after;
}

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Projects => view! { <ProjectsPage /> }.into_any(),
        AppRoute::Messages => view! { <MessagesPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to=AppRoute::Dashboard class="btn btn-primary mt-6">
                        "Back to dashboard"
                    </Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 全局上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    provide_context(ThemeContext::new());
    provide_context(ProjectsRefresh::new());

    // 2. 恢复上次使用的后端地址
    init_auth(&auth_ctx);

    // 3. 认证信号注入路由服务，由其负责守卫与重定向
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
