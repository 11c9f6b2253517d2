//! Dashboard page with the clinic overview.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the session gate while an operator is signed in. The figures
//! are fixed display content; nothing here is fetched or derived.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::stat_card::{StatCard, Tone};
use crate::net::types::User;

/// One headline figure on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

/// Quick stats shown in the dashboard grid, in display order.
pub const CLINIC_METRICS: [Metric; 4] = [
    Metric { label: "Total Patients", value: "1,234", tone: Tone::Blue },
    Metric { label: "Today's Visits", value: "42", tone: Tone::Green },
    Metric { label: "Sales Today", value: "₿15,420", tone: Tone::Purple },
    Metric { label: "Low Stock Items", value: "7", tone: Tone::Orange },
];

#[must_use]
pub fn welcome_heading() -> &'static str {
    "Welcome back! 👋"
}

/// Sentence following the signed-in identity in the welcome panel.
pub const WELCOME_BLURB: &str =
    "This is your clinic dashboard where you can manage patients, appointments, inventory, and more.";

/// Plain-text body of the welcome panel naming the signed-in user.
///
/// The rendered panel shows the same text with the email in bold.
#[must_use]
pub fn welcome_message(user: &User) -> String {
    format!("You're logged in as {}. {WELCOME_BLURB}", user.email)
}

/// Dashboard page: header with logout, quick stats, and a welcome panel.
#[component]
pub fn DashboardPage(user: User, on_logout: Callback<()>) -> impl IntoView {
    let email = user.email.clone();

    view! {
        <div class="dashboard-page">
            <AppHeader email=user.email on_logout=on_logout/>
            <main class="dashboard-page__main">
                <h2 class="dashboard-page__title">"Dashboard"</h2>
                <div class="dashboard-page__stats">
                    {CLINIC_METRICS
                        .iter()
                        .map(|metric| {
                            view! { <StatCard label=metric.label value=metric.value tone=metric.tone/> }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <section class="welcome-panel">
                    <h3 class="welcome-panel__heading">{welcome_heading()}</h3>
                    <p class="welcome-panel__body">
                        "You're logged in as " <strong>{email}</strong> ". " {WELCOME_BLURB}
                    </p>
                </section>
            </main>
        </div>
    }
}
