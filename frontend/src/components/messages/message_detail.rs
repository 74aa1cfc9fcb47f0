use folio_dash_shared::Message;
use leptos::prelude::*;

use super::message_card::read_toggle_label;
use crate::components::icons::*;
use crate::styles;
use crate::theme::use_theme;

/// 右侧详情面板，未选中时显示占位；`on_close` 取消选中
#[component]
pub fn MessageDetail(
    #[prop(into)] message: Signal<Option<Message>>,
    #[prop(into)] on_star: Callback<String>,
    #[prop(into)] on_toggle_read: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=move || format!("card border shadow-sm h-full {}", styles::surface(theme.is_dark()))>
            {move || match message.get() {
                None => view! {
                    <div class="card-body items-center justify-center text-center opacity-60">
                        <Mail attr:class="h-12 w-12" />
                        <p>"Select a message to read"</p>
                    </div>
                }
                .into_any(),
                Some(m) => {
                    let (star_id, read_id, delete_id) = (m.id.clone(), m.id.clone(), m.id.clone());
                    view! {
                        <div class="card-body gap-4">
                            <div class="flex items-start justify-between gap-4">
                                <div>
                                    <h2 class="text-xl font-bold">{m.subject.clone()}</h2>
                                    <p class="text-sm">
                                        {m.name.clone()} " <" {m.email.clone()} ">"
                                    </p>
                                    <p class=format!("text-xs {}", styles::muted_text(theme.is_dark()))>
                                        {m.display_datetime()}
                                    </p>
                                </div>
                                <div class="flex items-center gap-2">
                                    <span class=styles::priority_badge(m.priority)>{m.priority.as_str()}</span>
                                    {(!m.is_read).then(|| view! { <span class="badge badge-primary badge-sm">"Unread"</span> })}
                                    <button class="btn btn-ghost btn-sm btn-square" title="Close" on:click=move |_| on_close.run(())>
                                        <X attr:class="h-4 w-4" />
                                    </button>
                                </div>
                            </div>

                            <div class="flex gap-2">
                                <button class="btn btn-sm btn-ghost gap-1" on:click=move |_| on_star.run(star_id.clone())>
                                    <Star attr:class={if m.is_starred { "h-4 w-4 text-yellow-400 fill-yellow-400" } else { "h-4 w-4" }} />
                                    {if m.is_starred { "Unstar" } else { "Star" }}
                                </button>
                                <button class="btn btn-sm btn-ghost gap-1" on:click=move |_| on_toggle_read.run(read_id.clone())>
                                    <MailOpen attr:class="h-4 w-4" />
                                    {read_toggle_label(m.is_read)}
                                </button>
                                <button class="btn btn-sm btn-ghost text-error gap-1" on:click=move |_| on_delete.run(delete_id.clone())>
                                    <Trash2 attr:class="h-4 w-4" />
                                    "Delete"
                                </button>
                            </div>

                            <div class="divider my-0"></div>
                            <p class="whitespace-pre-wrap leading-relaxed">{m.body.clone()}</p>

                            {(!m.attachments.is_empty()).then(|| view! {
                                <div>
                                    <h4 class="font-semibold mb-2">"Attachments"</h4>
                                    <ul class="space-y-1">
                                        {m.attachments
                                            .iter()
                                            .map(|name| view! {
                                                <li class="flex items-center gap-2 text-sm">
                                                    <Paperclip attr:class="h-4 w-4" />
                                                    {name.clone()}
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
