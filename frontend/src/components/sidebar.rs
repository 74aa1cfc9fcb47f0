use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::icons::*;
use crate::styles;
use crate::theme::use_theme;
use crate::web::route::AppRoute;
use crate::web::router::{Link, is_active};

fn nav_icon(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Projects => view! { <Folder attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Messages => view! { <Mail attr:class="h-5 w-5" /> }.into_any(),
        _ => view! { <LayoutDashboard attr:class="h-5 w-5" /> }.into_any(),
    }
}

/// 侧边导航栏
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();

    view! {
        <aside class=move || format!(
            "w-64 shrink-0 flex flex-col border-r {}",
            styles::surface(theme.is_dark()),
        )>
            <div class="flex items-center gap-2 px-6 py-5">
                <Briefcase attr:class="h-7 w-7 text-primary" />
                <span class="text-xl font-bold">"Folio Dash"</span>
            </div>

            <nav class="flex-1 px-3 space-y-1">
                {AppRoute::NAVIGATION
                    .into_iter()
                    .map(|route| {
                        let active = is_active(route);
                        view! {
                            <Link
                                to=route
                                class=Signal::derive(move || {
                                    styles::nav_link(theme.is_dark(), active.get()).to_string()
                                })
                            >
                                {nav_icon(route)}
                                <span>{route.title()}</span>
                            </Link>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="p-4">
                <div class=move || format!(
                    "flex items-center gap-3 p-3 rounded-lg border {}",
                    styles::surface(theme.is_dark()),
                )>
                    <div class="avatar placeholder">
                        <div class="bg-primary text-primary-content rounded-full w-10">
                            <span>{move || auth.user_name().chars().next().unwrap_or('?').to_string()}</span>
                        </div>
                    </div>
                    <div class="min-w-0">
                        <p class="font-medium truncate">{move || auth.user_name()}</p>
                        <p class=move || format!("text-xs truncate {}", styles::muted_text(theme.is_dark()))>
                            {move || auth.state.with(|s| s.backend_url.clone())}
                        </p>
                    </div>
                </div>
            </div>
        </aside>
    }
}
