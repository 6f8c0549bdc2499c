//! Tab content registry: маппинг tab.key → View. Все ключи вкладок собраны здесь.

use super::parse_detail_key;
use crate::domain::a001_venue::ui::list::VenueList;
use crate::domain::a002_court::ui::details::CourtDetails;
use crate::domain::a002_court::ui::list::CourtList;
use crate::domain::a003_court_mapping::ui::details::CourtMappingDetails;
use crate::domain::a003_court_mapping::ui::list::CourtMappingList;
use crate::domain::a004_news_category::ui::list::NewsCategoryList;
use crate::domain::a005_news::ui::details::NewsDetails;
use crate::domain::a005_news::ui::list::NewsList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::settings::ui::SettingsPage;
use crate::system::users::ui::list::UsersListPage;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент вкладки по её ключу.
///
/// `tabs_store` нужен формам, чтобы закрыть свою вкладку после сохранения или отмены.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    match key {
        "a001_venue" => view! { <VenueList /> }.into_any(),
        "a002_court" => view! { <CourtList /> }.into_any(),
        "a003_court_mapping" => view! { <CourtMappingList /> }.into_any(),
        "a004_news_category" => view! { <NewsCategoryList /> }.into_any(),
        "a005_news" => view! { <NewsList /> }.into_any(),
        "sys_users" => view! { <UsersListPage /> }.into_any(),
        "sys_settings" => view! { <SettingsPage /> }.into_any(),
        k => match parse_detail_key(k) {
            Some(("a002_court", id)) => view! { <CourtDetails id=id on_close=on_close /> }.into_any(),
            Some(("a003_court_mapping", id)) => {
                view! { <CourtMappingDetails id=id on_close=on_close /> }.into_any()
            }
            Some(("a005_news", id)) => view! { <NewsDetails id=id on_close=on_close /> }.into_any(),
            _ => {
                log!("Unknown tab type: {}", key);
                view! { <div class="placeholder">"Раздел не найден"</div> }.into_any()
            }
        },
    }
}
