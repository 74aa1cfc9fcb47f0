use folio_dash_shared::Project;
use leptos::prelude::*;

use crate::components::icons::*;
use crate::styles;
use crate::theme::use_theme;

/// 项目页的展示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Card,
    List,
}

#[component]
fn TagList(project: Project) -> impl IntoView {
    let hidden = project.hidden_tag_count();
    view! {
        <div class="flex flex-wrap gap-1">
            {project
                .visible_tags()
                .iter()
                .map(|tag| view! { <span class="badge badge-outline badge-sm">{tag.clone()}</span> })
                .collect_view()}
            {(hidden > 0).then(|| view! {
                <span class="badge badge-ghost badge-sm">{format!("+{} more", hidden)}</span>
            })}
        </div>
    }
}

#[component]
fn Actions(
    project: Project,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
    on_favorite: Callback<String>,
) -> impl IntoView {
    let id = project.id.clone();
    let (edit_id, delete_id, fav_id) = (id.clone(), id.clone(), id);
    let star_class = if project.fav {
        "h-5 w-5 text-yellow-400 fill-yellow-400"
    } else {
        "h-5 w-5"
    };

    view! {
        <div class="flex items-center gap-1">
            <button
                class="btn btn-ghost btn-sm btn-square"
                title={if project.fav { "Unfavorite" } else { "Favorite" }}
                on:click=move |_| on_favorite.run(fav_id.clone())
            >
                <Star attr:class=star_class />
            </button>
            {(!project.url.is_empty()).then(|| view! {
                <a href=project.url.clone() target="_blank" rel="noopener noreferrer" class="btn btn-ghost btn-sm btn-square" title="Open">
                    <ExternalLink attr:class="h-4 w-4" />
                </a>
            })}
            <button class="btn btn-ghost btn-sm btn-square" title="Edit" on:click=move |_| on_edit.run(edit_id.clone())>
                <Pencil attr:class="h-4 w-4" />
            </button>
            <button class="btn btn-ghost btn-sm btn-square text-error" title="Delete" on:click=move |_| on_delete.run(delete_id.clone())>
                <Trash2 attr:class="h-4 w-4" />
            </button>
        </div>
    }
}

/// 单个项目的卡片/列表行
#[component]
pub fn ProjectCard(
    project: Project,
    mode: ViewMode,
    #[prop(into)] on_edit: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_favorite: Callback<String>,
) -> impl IntoView {
    let theme = use_theme();
    let image = (!project.image_url.is_empty()).then(|| project.image_url.clone());

    match mode {
        ViewMode::Card => view! {
            <div class=move || format!("card border shadow-sm {}", styles::surface(theme.is_dark()))>
                {image.map(|src| view! {
                    <figure class="h-40">
                        <img src=src alt=project.name.clone() class="w-full h-full object-cover" />
                    </figure>
                })}
                <div class="card-body gap-3">
                    <div class="flex items-start justify-between gap-2">
                        <h3 class="card-title text-lg">{project.name.clone()}</h3>
                        <span class=styles::status_badge(project.status)>{project.status.label()}</span>
                    </div>
                    <p class=move || format!("text-sm line-clamp-3 {}", styles::muted_text(theme.is_dark()))>
                        {project.description.clone()}
                    </p>
                    <div>
                        <div class="flex justify-between text-xs mb-1">
                            <span>"Progress"</span>
                            <span>{format!("{}%", project.progress)}</span>
                        </div>
                        <progress class=styles::progress_bar(project.status) value=project.progress.to_string() max="100"></progress>
                    </div>
                    <TagList project=project.clone() />
                    {project.due_date.clone().map(|due| view! {
                        <p class="text-xs opacity-70">{format!("Due {}", due)}</p>
                    })}
                    <div class="card-actions justify-end">
                        <Actions project=project on_edit=on_edit on_delete=on_delete on_favorite=on_favorite />
                    </div>
                </div>
            </div>
        }
        .into_any(),
        ViewMode::List => view! {
            <div class=move || format!(
                "flex items-center gap-4 p-4 border rounded-lg {}",
                styles::surface(theme.is_dark()),
            )>
                {image.map(|src| view! {
                    <img src=src alt=project.name.clone() class="w-16 h-16 rounded object-cover" />
                })}
                <div class="flex-1 min-w-0 space-y-1">
                    <div class="flex items-center gap-2">
                        <h3 class="font-semibold truncate">{project.name.clone()}</h3>
                        <span class=styles::status_badge(project.status)>{project.status.label()}</span>
                    </div>
                    <p class=move || format!("text-sm truncate {}", styles::muted_text(theme.is_dark()))>
                        {project.description.clone()}
                    </p>
                    <TagList project=project.clone() />
                </div>
                <div class="w-32 hidden md:block">
                    <progress class=styles::progress_bar(project.status) value=project.progress.to_string() max="100"></progress>
                    <span class="text-xs">{format!("{}%", project.progress)}</span>
                </div>
                <Actions project=project on_edit=on_edit on_delete=on_delete on_favorite=on_favorite />
            </div>
        }
        .into_any(),
    }
}
