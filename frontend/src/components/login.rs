use folio_dash_shared::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{login, use_auth};
use crate::components::icons::Briefcase;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let name = RwSignal::new(String::new());
    let url = RwSignal::new(auth.state.with_untracked(|s| s.backend_url.clone()));
    let is_submitting = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    let is_loading = move || auth.state.with(|s| s.is_loading);

    // 登录成功后的跳转由路由服务监听认证状态完成
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        is_submitting.set(true);
        error_msg.set(None);

        spawn_local(async move {
            if let Err(e) = login(&auth, name.get_untracked(), url.get_untracked()).await {
                error_msg.try_set(Some(format!(
                    "Connection failed: {}. Check the backend URL.",
                    e.message()
                )));
            }
            is_submitting.try_set(false);
        });
    };

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <div class="flex flex-col items-center gap-2">
                            <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                <Briefcase attr:class="h-8 w-8" />
                            </div>
                            <h1 class="text-3xl font-bold">"Folio Dash"</h1>
                            <p class="text-base-content/70">
                                "Sign in to manage your portfolio"
                            </p>
                        </div>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            {move || error_msg.get().map(|msg| view! {
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{msg}</span>
                                </div>
                            })}

                            <div class="form-control">
                                <label class="label" for="name">
                                    <span class="label-text">"Your Name"</span>
                                </label>
                                <input
                                    id="name"
                                    type="text"
                                    placeholder=User::DEFAULT_NAME
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                    prop:value=move || name.get()
                                    class="input input-bordered"
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="url">
                                    <span class="label-text">"Backend URL"</span>
                                </label>
                                <input
                                    id="url"
                                    type="text"
                                    placeholder="http://localhost:5000 (empty for same origin)"
                                    on:input=move |ev| url.set(event_target_value(&ev))
                                    prop:value=move || url.get()
                                    class="input input-bordered"
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Connecting..." }.into_any()
                                    } else {
                                        "Sign In".into_any()
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
