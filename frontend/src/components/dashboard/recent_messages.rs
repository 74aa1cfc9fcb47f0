use folio_dash_shared::RECENT_LIMIT;
use folio_dash_shared::store::Inbox;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::styles;
use crate::theme::use_theme;
use crate::web::route::AppRoute;
use crate::web::router::Link;

/// 仪表盘上的最新消息摘要
#[component]
pub fn RecentMessages() -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();
    let inbox = RwSignal::new(Inbox::default());

    Effect::new(move |_| {
        let Some(api) = auth.api() else {
            return;
        };
        spawn_local(async move {
            if let Ok(messages) = api.list_messages().await {
                inbox.try_set(Inbox::new(messages));
            }
        });
    });

    let recent = Memo::new(move |_| inbox.with(|i| i.recent(RECENT_LIMIT)));

    view! {
        <div class=move || format!("card border shadow-sm {}", styles::surface(theme.is_dark()))>
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Recent Messages"</h3>
                    <span class="badge badge-primary">
                        {move || format!("{} unread", recent.with(|r| r.total_unread))}
                    </span>
                </div>
                <ul class="divide-y divide-base-300">
                    {move || recent
                        .get()
                        .shown
                        .into_iter()
                        .map(|m| {
                            let dark = theme.is_dark();
                            view! {
                                <li class=format!("py-3 {}", styles::priority_border(m.priority))>
                                    <div class="pl-3">
                                        <div class="flex justify-between">
                                            <span class={if m.is_read { "" } else { "font-semibold" }}>{m.name.clone()}</span>
                                            <span class=format!("text-xs {}", styles::muted_text(dark))>{m.display_time()}</span>
                                        </div>
                                        <p class="text-sm truncate">{m.subject.clone()}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                {move || {
                    let extra = recent.with(|r| r.extra_unread);
                    (extra > 0).then(|| view! {
                        <Link to=AppRoute::Messages class="link link-primary text-sm">
                            {format!("+{} more unread messages", extra)}
                        </Link>
                    })
                }}
            </div>
        </div>
    }
}
