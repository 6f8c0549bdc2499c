//! Боковое меню админки со сворачиваемыми группами

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "facilities",
            label: "Площадки",
            icon: "venues",
            items: vec![
                ("a001_venue", tab_label_for_key("a001_venue"), "venues"),
                ("a002_court", tab_label_for_key("a002_court"), "courts"),
                ("a003_court_mapping", tab_label_for_key("a003_court_mapping"), "mapping"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "content",
            label: "Контент",
            icon: "news",
            items: vec![
                ("a005_news", tab_label_for_key("a005_news"), "news"),
                ("a004_news_category", tab_label_for_key("a004_news_category"), "categories"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "administration",
            label: "Администрирование",
            icon: "settings",
            items: vec![
                ("sys_users", tab_label_for_key("sys_users"), "users"),
                ("sys_settings", tab_label_for_key("sys_settings"), "settings"),
            ],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let is_admin = auth_state.with_untracked(|state| {
        state
            .user_info
            .as_ref()
            .map(|u| u.is_admin())
            .unwrap_or(false)
    });

    let expanded_groups = RwSignal::new(vec!["facilities".to_string(), "content".to_string()]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().filter(|g| is_admin || !g.admin_only).map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(id)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items_have_labels() {
        for group in get_menu_groups() {
            for (id, label, _) in group.items {
                assert_ne!(id, label, "menu item {} has no label", id);
            }
        }
    }

    #[test]
    fn test_only_system_group_is_admin_only() {
        let admin_only: Vec<_> = get_menu_groups()
            .into_iter()
            .filter(|g| g.admin_only)
            .map(|g| g.id)
            .collect();
        assert_eq!(admin_only, vec!["administration"]);
    }
}
