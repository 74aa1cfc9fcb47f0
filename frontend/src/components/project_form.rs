mod fields;
pub mod form_state;

use folio_dash_shared::protocol::ProjectPayload;
use leptos::prelude::*;

use fields::ProjectFields;
use form_state::FormState;

/// 校验当前输入，失败时写入 `error`；输入本身保持不变
fn checked_payload(state: FormState, error: RwSignal<Option<String>>) -> Option<ProjectPayload> {
    match state.to_draft().validate() {
        Ok(payload) => {
            error.set(None);
            Some(payload)
        }
        Err(e) => {
            error.set(Some(e.to_string()));
            None
        }
    }
}

/// 新建/编辑项目共用的模态框
///
/// 由调用方持有 `open` 与 `state`，编辑时先 `state.load(..)` 再打开。
/// 校验失败时在框内提示，通过后把请求体交给 `on_submit`。
/// 对话框不会自行关闭，调用方在请求成功后调用 `state.finish(open)`。
#[component]
pub fn ProjectFormDialog(
    open: RwSignal<bool>,
    state: FormState,
    title: &'static str,
    submit_label: &'static str,
    #[prop(into)] on_submit: Callback<ProjectPayload>,
) -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        if open.get() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        } else if dialog.open() {
            dialog.close();
        }
    });

    let close = move || {
        open.set(false);
        error.set(None);
    };

    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(payload) = checked_payload(state, error) {
            on_submit.run(payload);
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| close()>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">{title}</h3>

                <form on:submit=handle_submit class="space-y-4 mt-4" novalidate>
                    {move || error.get().map(|msg| view! {
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{msg}</span>
                        </div>
                    })}

                    <ProjectFields state=state />

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">{submit_label}</button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_submission_keeps_the_typed_fields() {
        let state = FormState::new();
        state.name.set("Folio".into());
        state.description.set("Dashboard".into());
        state.progress.set("140".into());
        let error = RwSignal::new(Some("stale".to_string()));

        let payload = checked_payload(state, error).unwrap();
        assert_eq!(payload.progress, 100);
        assert_eq!(error.get_untracked(), None);
        // 请求结果未知前输入不被清空
        assert_eq!(state.name.get_untracked(), "Folio");
        assert_eq!(state.progress.get_untracked(), "140");
    }

    #[test]
    fn missing_required_fields_report_inline() {
        let state = FormState::new();
        state.name.set("Folio".into());
        let error = RwSignal::new(None);

        assert!(checked_payload(state, error).is_none());
        assert_eq!(
            error.get_untracked().as_deref(),
            Some("Please fill out the required fields.")
        );
        assert_eq!(state.name.get_untracked(), "Folio");
    }
}
