//! 认证模块
//!
//! 管理当前用户与已验证的 API 客户端，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use folio_dash::{ApiResult, log_info};
use folio_dash_shared::User;
use leptos::prelude::*;

use crate::api::{Api, connect};
use crate::web::LocalStorage;

const STORAGE_URL_KEY: &str = "folio_dash_url";

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// API 客户端实例（仅在认证成功后存在）
    pub api: Option<Api>,
    /// 当前用户（仅在内存中）
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    /// 后端 URL（用于自动填充）
    pub backend_url: String,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            is_loading: true,
            ..Default::default()
        });
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_authenticated))
    }

    /// 当前已认证的客户端（非响应式读取，可在事件回调中使用）
    pub fn api(&self) -> Option<Api> {
        self.state.with_untracked(|s| s.api.clone())
    }

    /// 当前用户名，未登录时为空
    pub fn user_name(&self) -> String {
        self.state
            .with(|s| s.user.as_ref().map(|u| u.name.clone()))
            .unwrap_or_default()
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 优先使用上次成功登录的 URL，其次使用编译期配置的默认地址。
pub fn init_auth(ctx: &AuthContext) {
    let remembered = LocalStorage::get(STORAGE_URL_KEY);
    ctx.set_state.update(|state| {
        state.is_loading = false;
        state.backend_url = remembered
            .unwrap_or_else(|| folio_dash::ApiConfig::from_build_env().base_url().to_string());
    });
}

/// 登录：通过请求 `/api/stats` 验证后端可用
///
/// 成功后用户与客户端只保存在内存中，只有 URL 写入 LocalStorage。
pub async fn login(ctx: &AuthContext, name: String, url: String) -> ApiResult<()> {
    let api = connect(&url);
    api.stats().await?;

    let user = User::new(&name);
    let target = if api.config().is_same_origin() {
        "same origin"
    } else {
        api.config().base_url()
    };
    log_info!("[Auth] Logged in as {} against {}", user.name, target);
    LocalStorage::set(STORAGE_URL_KEY, &url);

    ctx.set_state.update(|state| {
        state.api = Some(api);
        state.user = Some(user);
        state.backend_url = url;
        state.is_authenticated = true;
    });
    Ok(())
}

/// 注销并清除状态
///
/// 导航由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    ctx.set_state.update(|state| {
        state.api = None;
        state.user = None;
        state.is_authenticated = false;
        // 保留 URL 方便下次登录
    });
}
