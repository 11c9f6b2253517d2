//! Card showing a single headline figure.
//!
//! DESIGN
//! ======
//! The tone only selects a colour modifier class; layout is shared by every
//! card so the dashboard grid stays uniform.

#[cfg(test)]
#[path = "stat_card_test.rs"]
mod stat_card_test;

use leptos::prelude::*;

/// Accent colour of a stat card's badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Green,
    Purple,
    Orange,
}

impl Tone {
    /// BEM modifier applied to the card badge.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Blue => "stat-card__badge stat-card__badge--blue",
            Self::Green => "stat-card__badge stat-card__badge--green",
            Self::Purple => "stat-card__badge stat-card__badge--purple",
            Self::Orange => "stat-card__badge stat-card__badge--orange",
        }
    }
}

/// First character of the label, shown inside the badge.
fn badge_glyph(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}

#[component]
pub fn StatCard(label: &'static str, value: &'static str, tone: Tone) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class=tone.badge_class() aria-hidden="true">
                {badge_glyph(label)}
            </div>
            <div class="stat-card__text">
                <p class="stat-card__label">{label}</p>
                <p class="stat-card__value">{value}</p>
            </div>
        </div>
    }
}
