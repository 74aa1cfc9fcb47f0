//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置与预填
//! - 数据到草稿对象的转换

use folio_dash_shared::draft::ProjectDraft;
use folio_dash_shared::{Project, ProjectStatus};
use leptos::prelude::*;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub status: RwSignal<ProjectStatus>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub progress: RwSignal<String>,
    pub tags: RwSignal<String>,
    pub image_url: RwSignal<String>,
    pub url: RwSignal<String>,
    pub due_date: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::from_draft(ProjectDraft::default())
    }

    fn from_draft(draft: ProjectDraft) -> Self {
        Self {
            status: RwSignal::new(draft.status),
            name: RwSignal::new(draft.name),
            description: RwSignal::new(draft.description),
            progress: RwSignal::new(draft.progress),
            tags: RwSignal::new(draft.tags),
            image_url: RwSignal::new(draft.image_url),
            url: RwSignal::new(draft.url),
            due_date: RwSignal::new(draft.due_date),
        }
    }

    // 异步请求返回时组件可能已卸载，因此用 try_set
    fn apply(&self, draft: ProjectDraft) {
        self.status.try_set(draft.status);
        self.name.try_set(draft.name);
        self.description.try_set(draft.description);
        self.progress.try_set(draft.progress);
        self.tags.try_set(draft.tags);
        self.image_url.try_set(draft.image_url);
        self.url.try_set(draft.url);
        self.due_date.try_set(draft.due_date);
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.apply(ProjectDraft::default());
    }

    /// 服务器确认后关闭对话框并清空输入
    ///
    /// 请求失败时调用方不调用它，对话框与已填内容保持不变。
    pub fn finish(&self, open: RwSignal<bool>) {
        open.try_set(false);
        self.reset();
    }

    /// 用已有项目预填（编辑模式）
    pub fn load(&self, project: &Project) {
        self.apply(ProjectDraft::from_project(project));
    }

    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            status: self.status.get_untracked(),
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            progress: self.progress.get_untracked(),
            tags: self.tags.get_untracked(),
            image_url: self.image_url.get_untracked(),
            url: self.url.get_untracked(),
            due_date: self.due_date.get_untracked(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let state = FormState::new();
        state.name.set("Folio".into());
        state.description.set("Dashboard".into());
        state.tags.set("Rust, Leptos".into());
        state
    }

    #[test]
    fn finish_closes_and_clears() {
        let state = filled();
        let open = RwSignal::new(true);
        state.finish(open);
        assert!(!open.get_untracked());
        assert_eq!(state.to_draft(), ProjectDraft::default());
    }

    #[test]
    fn load_prefills_from_project() {
        let state = FormState::new();
        let project = Project {
            id: "p1".into(),
            name: "Site".into(),
            status: ProjectStatus::Unknown,
            technologies: vec!["Rust".into()],
            ..Project::default()
        };
        state.load(&project);
        assert_eq!(state.name.get_untracked(), "Site");
        assert_eq!(state.status.get_untracked(), ProjectStatus::Pending);
        assert_eq!(state.tags.get_untracked(), "Rust");
    }
}
