use folio_dash_shared::{Metric, Stats};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::icons::*;
use crate::styles;
use crate::theme::use_theme;

/// 变化量说明文字，`suffix` 为空时使用固定文案
fn change_caption(change: &Metric, suffix: &str) -> String {
    if suffix.is_empty() {
        "Compared to last month".to_string()
    } else {
        format!("{} {}", change.signed(), suffix)
    }
}

#[component]
fn StatCard(
    title: &'static str,
    value: Metric,
    change: Metric,
    suffix: &'static str,
    icon: AnyView,
) -> impl IntoView {
    let theme = use_theme();
    let negative = change.is_negative() && !suffix.is_empty();

    view! {
        <div class=move || format!("card border shadow-sm {}", styles::surface(theme.is_dark()))>
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <span class=move || styles::muted_text(theme.is_dark())>{title}</span>
                    <span class="text-primary">{icon}</span>
                </div>
                <div class="text-3xl font-bold">{value.to_string()}</div>
                <div class=format!("text-sm {}", styles::change_text(negative))>
                    {change_caption(&change, suffix)}
                </div>
            </div>
        </div>
    }
}

/// 仪表盘顶部的四个统计卡片
#[component]
pub fn StatsCards() -> impl IntoView {
    let auth = use_auth();
    let stats = RwSignal::new(None::<Stats>);

    Effect::new(move |_| {
        let Some(api) = auth.api() else {
            return;
        };
        spawn_local(async move {
            // 失败已由客户端记录日志，卡片保持加载态
            if let Ok(data) = api.stats().await {
                stats.try_set(Some(data));
            }
        });
    });

    view! {
        {move || match stats.get() {
            None => view! {
                <div class="flex justify-center py-8">
                    <span class="loading loading-spinner loading-md"></span>
                </div>
            }.into_any(),
            Some(s) => view! {
                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
                    <StatCard
                        title="Total Projects"
                        value=s.total_projects
                        change=s.total_projects_change
                        suffix="this month"
                        icon=view! { <Folder attr:class="h-6 w-6" /> }.into_any()
                    />
                    <StatCard
                        title="Messages"
                        value=s.messages
                        change=s.messages_change
                        suffix="this week"
                        icon=view! { <Mail attr:class="h-6 w-6" /> }.into_any()
                    />
                    <StatCard
                        title="Portfolio Views"
                        value=s.portfolio_views
                        change=s.portfolio_views_change
                        suffix="this month"
                        icon=view! { <Eye attr:class="h-6 w-6" /> }.into_any()
                    />
                    <StatCard
                        title="Engagement Rate"
                        value=s.engagement_rate
                        change=Metric::default()
                        suffix=""
                        icon=view! { <TrendingUp attr:class="h-6 w-6" /> }.into_any()
                    />
                </div>
            }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_prefix_non_negative_changes() {
        assert_eq!(change_caption(&Metric::Int(3), "this month"), "+3 this month");
        assert_eq!(change_caption(&Metric::Int(-1), "this week"), "-1 this week");
        assert_eq!(change_caption(&Metric::Int(7), ""), "Compared to last month");
    }
}
