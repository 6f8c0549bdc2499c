//! Контейнер вкладки админки.
//!
//! Контент рендерится при открытии и живёт до закрытия вкладки; неактивная
//! вкладка только скрыта, так что фильтры, сортировка и страница списка не теряются.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key;

    let active = {
        let key = key.clone();
        Memo::new(move |_| tabs_store.active.with(|a| a.as_deref() == Some(key.as_str())))
    };

    log!("tab opened: {}", key);
    {
        let key = key.clone();
        on_cleanup(move || log!("tab closed: {}", key));
    }

    let content = render_tab_content(&key, tabs_store);

    view! {
        <div class="tabs__item" class:tabs__item--hidden=move || !active.get() data-tab-key=key>
            {content}
        </div>
    }
}
