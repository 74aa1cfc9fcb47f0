mod filter_dropdown;
mod message_card;
mod message_detail;

use folio_dash::{ApiError, log_error};
use folio_dash_shared::query::MessageFilter;
use folio_dash_shared::store::Inbox;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::icons::Search;
use crate::components::layout::Layout;
use crate::components::notification::{Notice, Toast, notice_signal};
use crate::styles;
use crate::theme::use_theme;
use filter_dropdown::FilterDropdown;
use message_card::MessageCard;
use message_detail::MessageDetail;

/// 被删除的消息正处于选中状态时清空选中
fn deselect(selected: &mut Option<String>, id: &str) {
    if selected.as_deref() == Some(id) {
        *selected = None;
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();
    let notice = notice_signal();

    let inbox = RwSignal::new(Inbox::default());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let filter = RwSignal::new(MessageFilter::All);
    let selected_id = RwSignal::new(None::<String>);

    let report = move |action: &str, e: ApiError| {
        log_error!("[Messages] Failed to {}: {}", action, e);
        notice.try_set(Some(Notice::error(format!("Failed to {}: {}", action, e.message()))));
    };

    Effect::new(move |_| {
        let Some(api) = auth.api() else {
            return;
        };
        spawn_local(async move {
            match api.list_messages().await {
                Ok(messages) => {
                    inbox.try_set(Inbox::new(messages));
                }
                Err(e) => report("load messages", e),
            }
            loading.try_set(false);
        });
    });

    // 每次渲染都重新计算，筛选与排序都是纯函数
    let visible = Memo::new(move |_| {
        let term = search.get();
        let filter = filter.get();
        inbox.with(|i| i.visible(&term, filter))
    });

    let selected = Signal::derive(move || {
        selected_id.with(|id| id.as_deref().and_then(|id| inbox.with(|i| i.get(id).cloned())))
    });

    let toggle_read = Callback::new(move |id: String| {
        let Some(api) = auth.api() else {
            return;
        };
        spawn_local(async move {
            match api.toggle_read(&id).await {
                Ok(updated) => {
                    inbox.try_update(|i| i.replace(updated));
                }
                Err(e) => report("update message", e),
            }
        });
    });

    let toggle_star = Callback::new(move |id: String| {
        let Some(api) = auth.api() else {
            return;
        };
        spawn_local(async move {
            match api.toggle_star(&id).await {
                Ok(updated) => {
                    inbox.try_update(|i| i.replace(updated));
                }
                Err(e) => report("star message", e),
            }
        });
    });

    // 打开未读消息时顺带标记为已读
    let open = Callback::new(move |id: String| {
        let unread = inbox.with_untracked(|i| i.get(&id).is_some_and(|m| !m.is_read));
        selected_id.set(Some(id.clone()));
        if unread {
            toggle_read.run(id);
        }
    });

    let delete = Callback::new(move |id: String| {
        let Some(api) = auth.api() else {
            return;
        };
        spawn_local(async move {
            match api.delete_message(&id).await {
                Ok(()) => {
                    inbox.try_update(|i| i.remove(&id));
                    selected_id.try_update(|sel| deselect(sel, &id));
                    notice.try_set(Some(Notice::success("Message deleted")));
                }
                Err(e) => report("delete message", e),
            }
        });
    });

    view! {
        <Layout>
            <Toast notice=notice />
            <div class="space-y-4">
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <div>
                        <h2 class="text-2xl font-bold">"Messages"</h2>
                        <p class=move || format!("text-sm {}", styles::muted_text(theme.is_dark()))>
                            {move || inbox.with(|i| format!(
                                "{} unread · {} starred",
                                i.unread_count(),
                                i.starred_count(),
                            ))}
                        </p>
                    </div>
                    <div class="flex items-center gap-2">
                        <label class="input input-bordered input-sm flex items-center gap-2">
                            <Search attr:class="h-4 w-4 opacity-60" />
                            <input
                                type="text"
                                class="grow"
                                placeholder="Search messages..."
                                on:input=move |ev| search.set(event_target_value(&ev))
                                prop:value=move || search.get()
                            />
                        </label>
                        <FilterDropdown filter=filter />
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-5 gap-4">
                    <div class=move || format!(
                        "lg:col-span-2 card border shadow-sm overflow-hidden {}",
                        styles::surface(theme.is_dark()),
                    )>
                        <Show when=move || loading.get()>
                            <div class="flex justify-center py-8">
                                <span class="loading loading-spinner loading-md"></span>
                            </div>
                        </Show>
                        <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                            <p class="text-center py-8 opacity-60">"No messages found"</p>
                        </Show>
                        <ul class="divide-y divide-base-300">
                            <For
                                each=move || visible.get()
                                key=|m| (m.id.clone(), m.is_read, m.is_starred)
                                children=move |message| {
                                    let id = message.id.clone();
                                    let is_selected = Signal::derive(move || {
                                        selected_id.with(|sel| sel.as_deref() == Some(id.as_str()))
                                    });
                                    view! {
                                        <MessageCard
                                            message=message
                                            selected=is_selected
                                            on_open=open
                                            on_star=toggle_star
                                            on_toggle_read=toggle_read
                                            on_delete=delete
                                        />
                                    }
                                }
                            />
                        </ul>
                    </div>
                    <div class="lg:col-span-3">
                        <MessageDetail
                            message=selected
                            on_star=toggle_star
                            on_toggle_read=toggle_read
                            on_delete=delete
                            on_close=move |_| selected_id.set(None)
                        />
                    </div>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::deselect;

    #[test]
    fn deleting_the_open_message_clears_selection() {
        let mut selected = Some("m1".to_string());
        deselect(&mut selected, "m2");
        assert_eq!(selected.as_deref(), Some("m1"));
        deselect(&mut selected, "m1");
        assert_eq!(selected, None);
    }
}
