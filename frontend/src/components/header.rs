use folio_dash_shared::protocol::ProjectPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{alert, use_projects_refresh};
use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use crate::components::notification::{Notice, Toast, notice_signal};
use crate::components::project_form::ProjectFormDialog;
use crate::components::project_form::form_state::FormState;
use crate::styles;
use crate::theme::use_theme;

/// 顶部栏：欢迎语、主题切换、新建项目、注销
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();
    let refresh = use_projects_refresh();
    let notice = notice_signal();

    let dialog_open = RwSignal::new(false);
    let form = FormState::new();

    // 新建失败时弹出阻塞提示并保留对话框，成功则关闭并通知项目页刷新
    let handle_add = move |payload: ProjectPayload| {
        let Some(api) = auth.api() else {
            return;
        };
        spawn_local(async move {
            match api.create_project(payload).await {
                Ok(project) => {
                    form.finish(dialog_open);
                    notice.try_set(Some(Notice::success(format!("Project \"{}\" added", project.name))));
                    refresh.bump();
                }
                Err(e) => alert(&format!("Failed to add project: {}", e.message())),
            }
        });
    };

    view! {
        <Toast notice=notice />
        <header class=move || format!(
            "flex items-center justify-between px-6 py-4 border-b {}",
            styles::surface(theme.is_dark()),
        )>
            <div>
                <h1 class="text-2xl font-bold">
                    "Welcome back, " {move || auth.user_name()}
                </h1>
                <p class=move || format!("text-sm {}", styles::muted_text(theme.is_dark()))>
                    "Here's what's happening with your portfolio."
                </p>
            </div>
            <div class="flex items-center gap-2">
                <button
                    class="btn btn-ghost btn-circle"
                    title="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    {move || if theme.is_dark() {
                        view! { <Sun attr:class="h-5 w-5" /> }.into_any()
                    } else {
                        view! { <Moon attr:class="h-5 w-5" /> }.into_any()
                    }}
                </button>
                <button class="btn btn-primary gap-2" on:click=move |_| dialog_open.set(true)>
                    <Plus attr:class="h-4 w-4" /> "Add Project"
                </button>
                <button class="btn btn-outline btn-error gap-2" on:click=move |_| logout(&auth)>
                    <LogOut attr:class="h-4 w-4" /> "Logout"
                </button>
            </div>
        </header>
        <ProjectFormDialog
            open=dialog_open
            state=form
            title="Add New Project"
            submit_label="Add Project"
            on_submit=handle_add
        />
    }
}
