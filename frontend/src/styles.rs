//! 样式选择
//!
//! 根据主题与实体状态计算 CSS class，保持为纯函数以便测试。

use folio_dash_shared::{Priority, ProjectStatus};

/// 卡片、面板的底色
pub fn surface(is_dark: bool) -> &'static str {
    if is_dark {
        "bg-gray-800 border-gray-700 text-gray-100"
    } else {
        "bg-white border-gray-200 text-gray-900"
    }
}

/// 次要文字
pub fn muted_text(is_dark: bool) -> &'static str {
    if is_dark { "text-gray-400" } else { "text-gray-500" }
}

/// 悬停高亮
pub fn hover_row(is_dark: bool) -> &'static str {
    if is_dark { "hover:bg-gray-700" } else { "hover:bg-gray-50" }
}

/// 项目状态徽章
pub fn status_badge(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "badge badge-success",
        ProjectStatus::InProgress => "badge badge-info",
        ProjectStatus::Pending => "badge badge-warning",
        ProjectStatus::Unknown => "badge badge-ghost",
    }
}

/// 进度条颜色
pub fn progress_bar(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "progress progress-success",
        ProjectStatus::InProgress => "progress progress-info",
        _ => "progress progress-warning",
    }
}

/// 消息优先级徽章
pub fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge badge-error badge-sm",
        Priority::Medium => "badge badge-warning badge-sm",
        Priority::Low => "badge badge-success badge-sm",
        Priority::Unknown => "badge badge-ghost badge-sm",
    }
}

/// 消息卡片左侧的优先级色条
pub fn priority_border(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "border-l-4 border-l-red-500",
        Priority::Medium => "border-l-4 border-l-yellow-500",
        Priority::Low => "border-l-4 border-l-green-500",
        Priority::Unknown => "border-l-4 border-l-transparent",
    }
}

/// 消息卡片：未读加粗，选中高亮
pub fn message_card(is_dark: bool, is_read: bool, is_selected: bool) -> String {
    let base = if is_selected {
        if is_dark { "bg-gray-700" } else { "bg-blue-50" }
    } else {
        hover_row(is_dark)
    };
    let weight = if is_read { "font-normal" } else { "font-semibold" };
    format!("p-4 cursor-pointer transition-colors {} {}", base, weight)
}

/// 侧边栏导航链接
pub fn nav_link(is_dark: bool, is_active: bool) -> &'static str {
    match (is_active, is_dark) {
        (true, _) => "flex items-center gap-3 px-4 py-2 rounded-lg bg-primary text-primary-content",
        (false, true) => "flex items-center gap-3 px-4 py-2 rounded-lg text-gray-300 hover:bg-gray-700",
        (false, false) => "flex items-center gap-3 px-4 py-2 rounded-lg text-gray-600 hover:bg-gray-100",
    }
}

/// 统计变化量的颜色
pub fn change_text(is_negative: bool) -> &'static str {
    if is_negative { "text-error" } else { "text-success" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_selects_surface_variant() {
        assert!(surface(true).contains("bg-gray-800"));
        assert!(surface(false).contains("bg-white"));
        assert_ne!(muted_text(true), muted_text(false));
    }

    #[test]
    fn status_and_priority_styles() {
        assert_eq!(status_badge(ProjectStatus::Completed), "badge badge-success");
        assert_eq!(status_badge(ProjectStatus::Unknown), "badge badge-ghost");
        assert_eq!(progress_bar(ProjectStatus::Pending), "progress progress-warning");
        assert!(priority_border(Priority::High).contains("red"));
        assert!(priority_badge(Priority::Low).contains("success"));
    }

    #[test]
    fn unread_messages_are_bold() {
        assert!(message_card(false, false, false).contains("font-semibold"));
        assert!(message_card(false, true, false).contains("font-normal"));
        assert!(message_card(true, true, true).contains("bg-gray-700"));
    }

    #[test]
    fn active_link_is_highlighted_in_both_themes() {
        assert_eq!(nav_link(true, true), nav_link(false, true));
        assert!(nav_link(false, true).contains("bg-primary"));
        assert!(!nav_link(false, false).contains("bg-primary"));
    }
}
