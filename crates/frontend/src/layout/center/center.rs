use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Полоса заголовков вкладок и область контента
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab: &TabData| (tab.key.clone(), tab.title.clone())
                    children=move |tab: TabData| view! { <TabComponent tab=tab /> }
                />
            </div>
            <Show when=move || tabs_store.opened.with(|t| t.is_empty())>
                <div class="tabs__placeholder">"Выберите раздел в меню слева"</div>
            </Show>
            {children()}
        </div>
    }
}
