//! 操作结果提示（Toast）

use leptos::prelude::*;

use crate::web::run_after;

/// 提示自动消失的时间
const DISMISS_AFTER_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// 创建提示信号，每次设置后三秒自动清除
pub fn notice_signal() -> RwSignal<Option<Notice>> {
    let notice = RwSignal::new(None::<Notice>);

    Effect::new(move |_| {
        if let Some(current) = notice.get() {
            run_after(DISMISS_AFTER_MS, move || {
                // 仅当仍是同一条提示时清除
                if notice.try_get_untracked().flatten().as_ref() == Some(&current) {
                    notice.try_set(None);
                }
            });
        }
    });

    notice
}

#[component]
pub fn Toast(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || notice.get().map(|n| view! {
            <div class="toast toast-top toast-end z-50">
                <div class={if n.is_error {
                    "alert alert-error shadow-lg"
                } else {
                    "alert alert-success shadow-lg"
                }}>
                    <span>{n.text}</span>
                </div>
            </div>
        })}
    }
}
