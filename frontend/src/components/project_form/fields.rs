//! 项目表单字段
//!
//! 纯粹的表单输入渲染，数据全部落在 [`FormState`] 中。

use folio_dash_shared::ProjectStatus;
use leptos::prelude::*;

use super::form_state::FormState;

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(optional)] required: bool,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=id class="label">
                <span class="label-text">{label} {required.then_some(" *")}</span>
            </label>
            <input
                id=id
                type=kind
                placeholder=placeholder
                required=required
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
            />
        </div>
    }
}

/// 项目表单字段组件
#[component]
pub fn ProjectFields(state: FormState) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4">
            <TextField id="project_name" label="Name" placeholder="Portfolio Website" required=true value=state.name />
            <div class="form-control">
                <label for="project_status" class="label">
                    <span class="label-text">"Status"</span>
                </label>
                <select
                    id="project_status"
                    class="select select-bordered w-full"
                    on:change=move |ev| state.status.set(ProjectStatus::from_value(&event_target_value(&ev)))
                >
                    {ProjectStatus::SELECTABLE
                        .into_iter()
                        .map(|status| view! {
                            <option
                                value=status.as_str()
                                selected=move || state.status.get() == status
                            >
                                {status.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
        </div>

        <div class="form-control">
            <label for="project_description" class="label">
                <span class="label-text">"Description *"</span>
            </label>
            <textarea
                id="project_description"
                required
                rows="3"
                placeholder="What is this project about?"
                on:input=move |ev| state.description.set(event_target_value(&ev))
                prop:value=move || state.description.get()
                class="textarea textarea-bordered w-full"
            ></textarea>
        </div>

        <div class="grid grid-cols-2 gap-4">
            <TextField id="project_progress" label="Progress (%)" kind="number" placeholder="0" value=state.progress />
            <TextField id="project_due" label="Due Date" kind="date" value=state.due_date />
        </div>

        <TextField id="project_tags" label="Technologies" placeholder="React, Node.js, MongoDB" value=state.tags />
        <label class="label pt-0">
            <span class="label-text-alt opacity-60">"Separate technologies with commas"</span>
        </label>

        <div class="grid grid-cols-2 gap-4">
            <TextField id="project_image" label="Image URL" kind="url" placeholder="https://..." value=state.image_url />
            <TextField id="project_url" label="Project URL" kind="url" placeholder="https://..." value=state.url />
        </div>
    }
}
