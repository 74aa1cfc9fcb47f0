mod project_card;

use folio_dash_shared::protocol::ProjectPayload;
use folio_dash_shared::store::ProjectBoard;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_projects_refresh;
use crate::auth::use_auth;
use crate::components::icons::*;
use crate::components::layout::Layout;
use crate::components::notification::{Notice, Toast, notice_signal};
use crate::components::project_form::ProjectFormDialog;
use crate::components::project_form::form_state::FormState;
use project_card::{ProjectCard, ViewMode};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = use_auth();
    let refresh = use_projects_refresh();
    let notice = notice_signal();

    let board = RwSignal::new(ProjectBoard::default());
    let loading = RwSignal::new(true);
    let mode = RwSignal::new(ViewMode::default());

    let edit_open = RwSignal::new(false);
    let edit_form = FormState::new();
    let editing_id = RwSignal::new(None::<String>);

    // 挂载时以及每次头部新建项目后重新拉取
    Effect::new(move |_| {
        refresh.track();
        let Some(api) = auth.api() else {
            return;
        };
        loading.set(true);
        spawn_local(async move {
            match api.list_projects().await {
                Ok(projects) => {
                    board.try_set(ProjectBoard::new(projects));
                }
                Err(e) => {
                    notice.try_set(Some(Notice::error(format!("Failed to load projects: {}", e.message()))));
                }
            }
            loading.try_set(false);
        });
    });

    let handle_favorite = Callback::new(move |id: String| {
        let Some(api) = auth.api() else {
            return;
        };
        spawn_local(async move {
            match api.toggle_favorite(&id).await {
                Ok(updated) => {
                    board.try_update(|b| b.apply_favorite(updated));
                }
                Err(e) => {
                    notice.try_set(Some(Notice::error(format!("Failed to update favorite: {}", e.message()))));
                }
            }
        });
    });

    let handle_delete = Callback::new(move |id: String| {
        let Some(api) = auth.api() else {
            return;
        };
        spawn_local(async move {
            match api.delete_project(&id).await {
                Ok(()) => {
                    board.try_update(|b| b.remove(&id));
                    notice.try_set(Some(Notice::success("Project deleted")));
                }
                Err(e) => {
                    notice.try_set(Some(Notice::error(format!("Failed to delete project: {}", e.message()))));
                }
            }
        });
    });

    let handle_edit = Callback::new(move |id: String| {
        let Some(project) = board.with_untracked(|b| b.get(&id).cloned()) else {
            return;
        };
        edit_form.load(&project);
        editing_id.set(Some(id));
        edit_open.set(true);
    });

    let handle_update = move |payload: ProjectPayload| {
        let (Some(api), Some(id)) = (auth.api(), editing_id.get_untracked()) else {
            return;
        };
        spawn_local(async move {
            match api.update_project(&id, payload).await {
                Ok(updated) => {
                    board.try_update(|b| b.replace(updated));
                    edit_form.finish(edit_open);
                    editing_id.try_set(None);
                    notice.try_set(Some(Notice::success("Project updated")));
                }
                Err(e) => {
                    notice.try_set(Some(Notice::error(format!("Failed to update project: {}", e.message()))));
                }
            }
        });
    };

    let mode_button = move |target: ViewMode| {
        move || {
            if mode.get() == target {
                "btn btn-sm btn-square btn-active"
            } else {
                "btn btn-sm btn-square btn-ghost"
            }
        }
    };

    view! {
        <Layout>
            <Toast notice=notice />
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h2 class="text-2xl font-bold">"Projects"</h2>
                        <p class="text-sm opacity-70">
                            {move || format!("{} projects", board.with(|b| b.len()))}
                        </p>
                    </div>
                    <div class="join">
                        <button class=mode_button(ViewMode::Card) title="Card view" on:click=move |_| mode.set(ViewMode::Card)>
                            <LayoutGrid attr:class="h-4 w-4" />
                        </button>
                        <button class=mode_button(ViewMode::List) title="List view" on:click=move |_| mode.set(ViewMode::List)>
                            <List attr:class="h-4 w-4" />
                        </button>
                    </div>
                </div>

                <Show when=move || loading.get() && board.with(|b| b.is_empty())>
                    <div class="flex justify-center py-12">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                </Show>
                <Show when=move || !loading.get() && board.with(|b| b.is_empty())>
                    <p class="text-center py-12 opacity-60">"No projects yet. Add one to get started."</p>
                </Show>

                <div class=move || {
                    match mode.get() {
                        ViewMode::Card => "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6",
                        ViewMode::List => "flex flex-col gap-3",
                    }
                }>
                    {move || {
                        let current = mode.get();
                        board.with(|b| {
                            b.projects()
                                .iter()
                                .cloned()
                                .map(|project| view! {
                                    <ProjectCard
                                        project=project
                                        mode=current
                                        on_edit=handle_edit
                                        on_delete=handle_delete
                                        on_favorite=handle_favorite
                                    />
                                })
                                .collect_view()
                        })
                    }}
                </div>
            </div>

            <ProjectFormDialog
                open=edit_open
                state=edit_form
                title="Edit Project"
                submit_label="Save Changes"
                on_submit=handle_update
            />
        </Layout>
    }
}
