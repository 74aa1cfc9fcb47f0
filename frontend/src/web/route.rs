//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面
    #[default]
    Login,
    /// 仪表盘首页 (需要认证)
    Dashboard,
    /// 项目管理 (需要认证)
    Projects,
    /// 消息收件箱 (需要认证)
    Messages,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 侧边栏中的导航项
    pub const NAVIGATION: [AppRoute; 3] = [Self::Dashboard, Self::Projects, Self::Messages];

    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match path {
            "/login" => Self::Login,
            "/" => Self::Dashboard,
            "/projects" => Self::Projects,
            "/messages" => Self::Messages,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Projects => "/projects",
            Self::Messages => "/messages",
            Self::NotFound => "/404",
        }
    }

    /// 导航链接文字
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Projects => "Projects",
            Self::Messages => "Messages",
            Self::NotFound => "Not Found",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Projects | Self::Messages)
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 守卫决策：在给定认证状态下访问 `self` 时实际应落到的路由
    ///
    /// 返回 `None` 表示放行。
    pub fn guard(&self, is_authenticated: bool) -> Option<Self> {
        if self.requires_auth() && !is_authenticated {
            Some(Self::auth_failure_redirect())
        } else if self.should_redirect_when_authenticated() && is_authenticated {
            Some(Self::auth_success_redirect())
        } else {
            None
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
    fn parses_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path(""), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/projects/"), AppRoute::Projects);
        assert_eq!(AppRoute::from_path("/messages"), AppRoute::Messages);
        assert_eq!(AppRoute::from_path("/settings"), AppRoute::NotFound);
    }

    #[test]
    fn paths_round_trip_for_navigable_routes() {
        for route in [AppRoute::Login, AppRoute::Dashboard, AppRoute::Projects, AppRoute::Messages] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unauthenticated_users_are_sent_to_login() {
        for route in AppRoute::NAVIGATION {
            assert_eq!(route.guard(false), Some(AppRoute::Login));
            assert_eq!(route.guard(true), None);
        }
    }

    #[test]
    fn authenticated_users_skip_login() {
        assert_eq!(AppRoute::Login.guard(true), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::Login.guard(false), None);
    }

    #[test]
    fn not_found_is_public() {
        assert_eq!(AppRoute::NotFound.guard(false), None);
        assert_eq!(AppRoute::NotFound.guard(true), None);
    }
}
