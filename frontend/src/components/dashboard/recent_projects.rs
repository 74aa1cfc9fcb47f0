use folio_dash_shared::RECENT_LIMIT;
use folio_dash_shared::store::ProjectBoard;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::icons::Star;
use crate::styles;
use crate::theme::use_theme;
use crate::web::route::AppRoute;
use crate::web::router::Link;

/// 仪表盘上的收藏项目
#[component]
pub fn RecentProjects() -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();
    let board = RwSignal::new(ProjectBoard::default());
    let loading = RwSignal::new(true);

    Effect::new(move |_| {
        let Some(api) = auth.api() else {
            return;
        };
        spawn_local(async move {
            if let Ok(projects) = api.list_projects().await {
                board.try_set(ProjectBoard::new(projects));
            }
            loading.try_set(false);
        });
    });

    let favorites = move || board.with(|b| b.favorites(RECENT_LIMIT));

    view! {
        <div class=move || format!("card border shadow-sm {}", styles::surface(theme.is_dark()))>
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Recent Projects"</h3>
                    <Link to=AppRoute::Projects class="link link-primary text-sm">"View all"</Link>
                </div>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <span class="loading loading-spinner loading-sm"></span> }
                >
                    <Show
                        when=move || !favorites().is_empty()
                        fallback=move || view! {
                            <p class=styles::muted_text(theme.is_dark())>"No starred projects yet"</p>
                        }
                    >
                        <ul class="space-y-3">
                            {move || favorites()
                                .into_iter()
                                .map(|p| view! {
                                    <li class="flex items-center gap-3">
                                        <Star attr:class="h-4 w-4 text-yellow-400 fill-yellow-400" />
                                        <div class="flex-1 min-w-0">
                                            <p class="font-medium truncate">{p.name.clone()}</p>
                                            <progress class=styles::progress_bar(p.status) value=p.progress.to_string() max="100"></progress>
                                        </div>
                                        <span class=styles::status_badge(p.status)>{p.status.label()}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
