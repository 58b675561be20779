use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual accent of a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Error => "stat-card stat-card--error",
        }
    }
}

/// Integer with non-breaking-space thousands separators, "—" when unknown
pub fn format_count(value: Option<u64>) -> String {
    let Some(n) = value else {
        return "—".to_string();
    };
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Counter value (None = not loaded)
    #[prop(into)]
    value: Signal<Option<u64>>,
    #[prop(optional)]
    tone: StatTone,
) -> impl IntoView {
    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || format_count(value.get())}</div>
            </div>
        </div>
    }
}
