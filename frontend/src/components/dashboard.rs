mod interaction_chart;
mod recent_messages;
mod recent_projects;
mod stats_cards;

use leptos::prelude::*;

use crate::components::layout::Layout;
use interaction_chart::InteractionChart;
use recent_messages::RecentMessages;
use recent_projects::RecentProjects;
use stats_cards::StatsCards;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <StatsCards />
                <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
                    <div class="xl:col-span-2">
                        <InteractionChart />
                    </div>
                    <RecentMessages />
                </div>
                <RecentProjects />
            </div>
        </Layout>
    }
}
