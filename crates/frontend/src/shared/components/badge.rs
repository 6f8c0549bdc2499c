use contracts::enums::{BookingStatus, CourtStatus, NewsStatus, UserRole};
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || variant_class(variant.get().as_deref().unwrap_or("neutral"));

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

fn status_badge(variant: &'static str, label: &'static str) -> impl IntoView {
    view! { <span class=format!("badge badge--status {}", variant_class(variant))>{label}</span> }
}

#[component]
pub fn CourtStatusBadge(#[prop(into)] status: Signal<CourtStatus>) -> impl IntoView {
    move || {
        let s = status.get();
        status_badge(s.badge_variant(), s.display_name())
    }
}

#[component]
pub fn NewsStatusBadge(#[prop(into)] status: Signal<NewsStatus>) -> impl IntoView {
    move || {
        let s = status.get();
        status_badge(s.badge_variant(), s.display_name())
    }
}

#[component]
pub fn BookingStatusBadge(status: BookingStatus) -> impl IntoView {
    status_badge(status.badge_variant(), status.display_name())
}

#[component]
pub fn RoleBadge(role: UserRole) -> impl IntoView {
    status_badge(role.badge_variant(), role.display_name())
}

/// Активен / отключён
#[component]
pub fn ActiveBadge(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    move || {
        if active.get() {
            status_badge("success", "Активен")
        } else {
            status_badge("error", "Отключён")
        }
    }
}
