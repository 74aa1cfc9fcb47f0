//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程。

use folio_dash::log_info;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 写入 History 状态：push 用于普通导航，replace 用于重定向
fn write_history(path: &str, use_push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = if use_push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入的信号）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        // 守卫拒绝时一律 replace，避免在历史中留下被拒绝的页面
        if let Some(redirect) = target_route.guard(is_auth) {
            log_info!("[Router] {} denied, redirecting to {}", target_route, redirect);
            write_history(redirect.to_path(), false);
            self.set_route.set(redirect);
            return;
        }

        write_history(target_route.to_path(), use_push);
        self.set_route.set(target_route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            // popstate 时也执行守卫逻辑，且不再新增历史记录
            router.navigate_to_route(target_route, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();

            if let Some(redirect) = route.guard(is_auth) {
                log_info!(
                    "[Router] Auth state changed (authenticated: {}), redirecting to {}.",
                    is_auth,
                    redirect
                );
                write_history(redirect.to_path(), false);
                router.set_route.set(redirect);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接，拦截点击并交给路由服务处理
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(to.to_path());
    };

    view! {
        <a href=to.to_path() class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}

/// 当前路由是否为 `route`（用于导航高亮）
pub fn is_active(route: AppRoute) -> Signal<bool> {
    let router = use_router();
    Signal::derive(move || router.current_route().get() == route)
}
