//! 前端使用的 API 客户端与相关上下文

use folio_dash::{ApiConfig, PortfolioApi};
use leptos::prelude::*;

use crate::web::FetchClient;

/// 浏览器中使用的具体客户端类型
pub type Api = PortfolioApi<FetchClient>;

/// 创建绑定到 `base_url` 的客户端
pub fn connect(base_url: &str) -> Api {
    PortfolioApi::new(ApiConfig::new(base_url), FetchClient)
}

/// 项目列表刷新触发器
///
/// 头部的 "Add Project" 成功后递增，已挂载的项目页据此重新拉取。
#[derive(Clone, Copy)]
pub struct ProjectsRefresh(RwSignal<u32>);

impl ProjectsRefresh {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    pub fn bump(&self) {
        self.0.update(|n| *n = n.wrapping_add(1));
    }

    /// 在 Effect 中调用以订阅刷新
    pub fn track(&self) -> u32 {
        self.0.get()
    }
}

impl Default for ProjectsRefresh {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_projects_refresh() -> ProjectsRefresh {
    use_context::<ProjectsRefresh>().expect("ProjectsRefresh should be provided")
}

/// 阻塞式提示框
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
