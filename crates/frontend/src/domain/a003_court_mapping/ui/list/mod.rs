//! Схема кортов: привязки дочерних кортов, сгруппированные по родителю

use std::collections::BTreeMap;

use contracts::domain::a002_court::Court;
use contracts::domain::a003_court_mapping::CourtMapping;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_court::api as court_api;
use crate::domain::a003_court_mapping::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_key, detail_tab_label, tab_label_for_key};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;

/// Группа строк одного родителя
#[derive(Clone, Debug, PartialEq)]
pub struct MappingGroup {
    pub parent_id: String,
    pub parent_name: String,
    pub slots: u32,
    pub items: Vec<CourtMapping>,
}

/// Группирует привязки по родителю: группы по имени родителя, внутри по позиции.
/// `parent_filter` оставляет одну группу.
pub fn group_by_parent(
    mappings: &[CourtMapping],
    courts: &[Court],
    parent_filter: Option<&str>,
) -> Vec<MappingGroup> {
    let mut groups: BTreeMap<&str, Vec<CourtMapping>> = BTreeMap::new();
    for m in mappings {
        if parent_filter.is_some_and(|p| p != m.parent_court_id) {
            continue;
        }
        groups.entry(m.parent_court_id.as_str()).or_default().push(m.clone());
    }

    let mut result: Vec<MappingGroup> = groups
        .into_iter()
        .map(|(parent_id, mut items)| {
            items.sort_by_key(|m| m.position);
            let parent = courts.iter().find(|c| c.id == parent_id);
            MappingGroup {
                parent_id: parent_id.to_string(),
                parent_name: parent
                    .map(|c| c.name.clone())
                    .or_else(|| items.first().and_then(|m| m.parent_court_name.clone()))
                    .unwrap_or_else(|| parent_id.to_string()),
                slots: parent.map_or(0, |c| c.sub_court_count),
                items,
            }
        })
        .collect();
    result.sort_by(|a, b| a.parent_name.to_lowercase().cmp(&b.parent_name.to_lowercase()));
    result
}

fn child_label(mapping: &CourtMapping, courts: &[Court]) -> String {
    courts
        .iter()
        .find(|c| c.id == mapping.child_court_id)
        .map(|c| c.name.clone())
        .or_else(|| mapping.child_court_name.clone())
        .unwrap_or_else(|| mapping.child_court_id.clone())
}

#[component]
pub fn CourtMappingList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toast = use_toast();
    let mappings: RwSignal<Vec<CourtMapping>> = RwSignal::new(Vec::new());
    let courts: RwSignal<Vec<Court>> = RwSignal::new(Vec::new());
    let parent_filter: RwSignal<Option<String>> = RwSignal::new(None);
    let (loading, set_loading) = signal(false);
    let (loaded, set_loaded) = signal(false);
    let pending_delete: RwSignal<Option<CourtMapping>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match court_api::fetch_courts().await {
                Ok(data) => courts.set(data),
                Err(e) => toast.api_error("Не удалось загрузить корты", &e),
            }
            match api::fetch_mappings().await {
                Ok(data) => {
                    mappings.set(data);
                    set_loaded.set(true);
                }
                Err(e) => toast.api_error("Не удалось загрузить схему кортов", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !loaded.get_untracked() {
            load_data();
        }
    });

    let groups = Memo::new(move |_| {
        let filter = parent_filter.get();
        mappings.with(|m| courts.with(|c| group_by_parent(m, c, filter.as_deref())))
    });

    let open_details = move |mapping: Option<&CourtMapping>| {
        let key = detail_key("a003_court_mapping", mapping.map(|m| m.id.as_str()));
        let title = match mapping {
            Some(m) => detail_tab_label("a003_court_mapping", &format!("#{}", m.position)),
            None => tab_label_for_key(&key).to_string(),
        };
        tabs_store.open_tab(&key, &title);
    };

    let delete_mapping = Callback::new(move |mapping: CourtMapping| {
        spawn_local(async move {
            match api::delete_mapping(&mapping.id).await {
                Ok(()) => {
                    mappings.update(|list| list.retain(|m| m.id != mapping.id));
                    toast.success("Привязка удалена");
                }
                Err(e) => toast.api_error("Не удалось удалить привязку", &e),
            }
        });
    });

    view! {
        <PageFrame page_id="a003_court_mapping--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Схема кортов"</h1>
                    <Badge>{move || mappings.with(|m| m.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None)>
                        {icon("plus")}
                        " Новая привязка"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel__inline">
                    <label class="form__label">"Родительский корт"</label>
                    <select
                        class="form__select"
                        on:change=move |ev| parent_filter.set(contracts::shared::text::non_empty(&event_target_value(&ev)))
                    >
                        <option value="">"Все"</option>
                        {move || courts.with(|list| {
                            contracts::domain::a003_court_mapping::rules::eligible_parents(list)
                                .into_iter()
                                .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
                                .collect_view()
                        })}
                    </select>
                </div>

                <For
                    each=move || groups.get()
                    key=|g| (g.parent_id.clone(), g.items.len(), g.items.iter().map(|m| m.id.clone()).collect::<Vec<_>>())
                    children=move |group| {
                        let used = group.items.len();
                        view! {
                            <div class="mapping-group">
                                <div class="mapping-group__header">
                                    {icon("mapping")}
                                    <span class="mapping-group__title">{group.parent_name.clone()}</span>
                                    <Badge>{format!("{} / {}", used, group.slots)}</Badge>
                                </div>
                                <Table attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell min_width=80.0>"Позиция"</TableHeaderCell>
                                            <TableHeaderCell min_width=200.0>"Дочерний корт"</TableHeaderCell>
                                            <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {group.items.into_iter().map(|m| {
                                            let for_edit = m.clone();
                                            let for_delete = m.clone();
                                            let label = courts.with_untracked(|c| child_label(&m, c));
                                            view! {
                                                <TableRow>
                                                    <TableCell>{m.position}</TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{label}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| open_details(Some(&for_edit))
                                                            attr:title="Редактировать"
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                            attr:title="Удалить"
                                                        >
                                                            {icon("delete")}
                                                        </Button>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            </div>
                        }
                    }
                />

                <Show when=move || loaded.get() && groups.with(|g| g.is_empty())>
                    <EmptyState message="Привязок нет" hint="Создайте привязку дочернего корта к родителю" icon_name="mapping" />
                </Show>

                <ConfirmDialog
                    pending=pending_delete
                    title="Удаление привязки"
                    message=Callback::new(|m: CourtMapping| {
                        format!(
                            "Отвязать «{}» от «{}» (позиция {})?",
                            m.child_court_name.unwrap_or(m.child_court_id),
                            m.parent_court_name.unwrap_or(m.parent_court_id),
                            m.position,
                        )
                    })
                    on_confirm=delete_mapping
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn court(id: &str, name: &str, slots: u32) -> Court {
        Court {
            id: id.into(),
            name: name.into(),
            sub_court_count: slots,
            ..Default::default()
        }
    }

    fn mapping(id: &str, parent: &str, child: &str, position: u32) -> CourtMapping {
        CourtMapping {
            id: id.into(),
            parent_court_id: parent.into(),
            child_court_id: child.into(),
            position,
            ..Default::default()
        }
    }

    #[test]
    fn test_group_by_parent_orders_groups_and_positions() {
        let courts = vec![court("p1", "Зал B", 3), court("p2", "Зал A", 2)];
        let mappings = vec![
            mapping("m1", "p1", "c3", 3),
            mapping("m2", "p1", "c1", 1),
            mapping("m3", "p2", "c5", 2),
        ];
        let groups = group_by_parent(&mappings, &courts, None);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].parent_name, "Зал A");
        assert_eq!(groups[1].slots, 3);
        let positions: Vec<u32> = groups[1].items.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn test_group_by_parent_filter_and_unknown_parent() {
        let mut orphan = mapping("m9", "gone", "c1", 1);
        orphan.parent_court_name = Some("Старый корт".into());
        let mappings = vec![mapping("m1", "p1", "c3", 1), orphan];
        let courts = vec![court("p1", "Зал", 2)];

        let only = group_by_parent(&mappings, &courts, Some("p1"));
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].parent_id, "p1");

        let all = group_by_parent(&mappings, &courts, None);
        let orphan_group = all.iter().find(|g| g.parent_id == "gone").unwrap();
        assert_eq!(orphan_group.parent_name, "Старый корт");
        assert_eq!(orphan_group.slots, 0);
    }
}
