//! Dashboard Panel
//!
//! Overview shown after login.

use leptos::*;

use crate::components::Panel;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    view! {
        <Panel id="dashboard">
            <div class="panel-header">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your practice at a glance"</p>
                </div>
            </div>

            <section class="summary-grid">
                <SummaryCard label="Sessions this week" icon="📅" />
                <SummaryCard label="Active patients" icon="👥" />
                <SummaryCard label="Pending payments" icon="💳" />
                <SummaryCard label="Income this month" icon="📈" />
            </section>

            <section class="card">
                <h2 class="text-xl font-semibold mb-4">"Upcoming sessions"</h2>
                <p class="text-gray-400">"No sessions scheduled."</p>
            </section>
        </Panel>
    }
}

#[component]
fn SummaryCard(label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <div class="card summary-card">
            <span class="text-2xl">{icon}</span>
            <div>
                <p class="text-gray-400 text-sm">{label}</p>
                <p class="text-2xl font-bold">"—"</p>
            </div>
        </div>
    }
}
