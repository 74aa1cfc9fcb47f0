use folio_dash_shared::Message;
use leptos::prelude::*;

use crate::components::icons::{Mail, MailOpen, Paperclip, Star, Trash2};
use crate::styles;
use crate::theme::use_theme;

/// 已读/未读切换按钮的文字
pub(super) fn read_toggle_label(is_read: bool) -> &'static str {
    if is_read { "Mark as unread" } else { "Mark as read" }
}

/// 收件箱列表中的一条消息
#[component]
pub fn MessageCard(
    message: Message,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] on_open: Callback<String>,
    #[prop(into)] on_star: Callback<String>,
    #[prop(into)] on_toggle_read: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let theme = use_theme();
    let is_read = message.is_read;
    let priority = message.priority;
    let (open_id, star_id) = (message.id.clone(), message.id.clone());
    let (read_id, delete_id) = (message.id.clone(), message.id.clone());

    view! {
        <li
            class=move || format!(
                "{} {}",
                styles::message_card(theme.is_dark(), is_read, selected.get()),
                styles::priority_border(priority),
            )
            on:click=move |_| on_open.run(open_id.clone())
        >
            <div class="flex items-start gap-3">
                <div class="avatar placeholder">
                    <div class="bg-neutral text-neutral-content rounded-full w-10">
                        <span>{message.initial()}</span>
                    </div>
                </div>
                <div class="flex-1 min-w-0">
                    <div class="flex items-center justify-between gap-2">
                        <span class="truncate">{message.name.clone()}</span>
                        <span class=move || format!("text-xs shrink-0 {}", styles::muted_text(theme.is_dark()))>
                            {message.display_time()}
                        </span>
                    </div>
                    <p class="text-sm truncate">{message.subject.clone()}</p>
                    <div class="flex items-center gap-2 mt-1">
                        <span class=styles::priority_badge(message.priority)>{message.priority.as_str()}</span>
                        {(!message.attachments.is_empty()).then(|| view! {
                            <Paperclip attr:class="h-3 w-3 opacity-60" />
                        })}
                        {(!is_read).then(|| view! { <span class="badge badge-primary badge-xs">"new"</span> })}
                    </div>
                </div>
                <div class="flex flex-col gap-1">
                    <button
                        class="btn btn-ghost btn-xs btn-square"
                        title="Star"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_star.run(star_id.clone());
                        }
                    >
                        <Star attr:class={if message.is_starred {
                            "h-4 w-4 text-yellow-400 fill-yellow-400"
                        } else {
                            "h-4 w-4"
                        }} />
                    </button>
                    <button
                        class="btn btn-ghost btn-xs btn-square"
                        title=read_toggle_label(is_read)
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_toggle_read.run(read_id.clone());
                        }
                    >
                        {if is_read {
                            view! { <Mail attr:class="h-4 w-4" /> }.into_any()
                        } else {
                            view! { <MailOpen attr:class="h-4 w-4" /> }.into_any()
                        }}
                    </button>
                    <button
                        class="btn btn-ghost btn-xs btn-square text-error"
                        title="Delete"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_delete.run(delete_id.clone());
                        }
                    >
                        <Trash2 attr:class="h-4 w-4" />
                    </button>
                </div>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_toggle_label_offers_the_opposite_state() {
        assert_eq!(read_toggle_label(false), "Mark as read");
        assert_eq!(read_toggle_label(true), "Mark as unread");
    }
}
