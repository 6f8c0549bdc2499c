use crate::shared::icons::icon;
use leptos::prelude::*;

/// Заглушка для пустого списка или результата фильтрации
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] icon_name: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon(icon_name.unwrap_or("filter"))}</div>
            <div class="empty-state__message">{message}</div>
            {hint.map(|h| view! { <div class="empty-state__hint">{h}</div> })}
        </div>
    }
}
