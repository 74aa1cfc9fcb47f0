use folio_dash_shared::query::MessageFilter;
use leptos::prelude::*;

#[component]
pub fn FilterDropdown(filter: RwSignal<MessageFilter>) -> impl IntoView {
    view! {
        <select
            class="select select-bordered select-sm"
            on:change=move |ev| filter.set(MessageFilter::from_value(&event_target_value(&ev)))
        >
            {MessageFilter::ALL
                .into_iter()
                .map(|option| view! {
                    <option value=option.value() selected=move || filter.get() == option>
                        {option.label()}
                    </option>
                })
                .collect_view()}
        </select>
    }
}
