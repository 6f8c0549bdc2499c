//! Оболочка админки: Sidebar + вкладки. Доступна администраторам и менеджерам.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAdmin;
use leptos::prelude::*;

/// Инициализирует синхронизацию вкладок с URL (?active=...).
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }.into_any()
            }
        />
    }
}

#[component]
pub fn AdminShell() -> impl IntoView {
    view! {
        <RequireAdmin>
            <MainLayout />
        </RequireAdmin>
    }
}
