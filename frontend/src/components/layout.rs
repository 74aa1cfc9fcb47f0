use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::theme::use_theme;

/// 已认证页面的外壳：侧边栏 + 顶部栏 + 页面内容
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div
            data-theme=move || theme.daisy_theme()
            class=move || {
                if theme.is_dark() {
                    "flex min-h-screen bg-gray-900 text-gray-100"
                } else {
                    "flex min-h-screen bg-gray-100 text-gray-900"
                }
            }
        >
            <Sidebar />
            <div class="flex-1 flex flex-col min-w-0">
                <Header />
                <main class="flex-1 p-6 overflow-y-auto">{children()}</main>
            </div>
        </div>
    }
}
