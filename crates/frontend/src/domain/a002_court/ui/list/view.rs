use contracts::domain::a001_venue::Venue;
use contracts::domain::a002_court::{Court, CourtFilter};
use contracts::enums::{CourtStatus, SportType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::state::{create_state, LIST_ID};
use crate::domain::a001_venue::api as venue_api;
use crate::domain::a002_court::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_key, detail_tab_label, tab_label_for_key};
use crate::shared::components::badge::CourtStatusBadge;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header::SortableHeaderCell;
use crate::shared::date_utils::format_thousands;
use crate::shared::export::{export_to_excel, ExcelExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ci, cmp_ci_opt, paginate, sort_list, toggle_sort_state, SearchInput, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::prefs::{save_list_prefs, ListPrefs};
use crate::shared::toast::use_toast;

impl Sortable for Court {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "venue" => cmp_ci_opt(self.venue_name.as_deref(), other.venue_name.as_deref()),
            "sport" => self.sport.display_name().cmp(other.sport.display_name()),
            "level" => self.level.cmp(&other.level),
            "capacity" => self.capacity.cmp(&other.capacity),
            "sub_court_count" => self.sub_court_count.cmp(&other.sub_court_count),
            "price" => self.price_per_hour.total_cmp(&other.price_per_hour),
            "status" => self.status.code().cmp(other.status.code()),
            _ => cmp_ci(&self.name, &other.name),
        }
    }
}

impl ExcelExportable for Court {
    fn headers() -> Vec<&'static str> {
        vec![
            "Название",
            "Площадка",
            "Вид спорта",
            "Покрытие",
            "Уровень",
            "Вместимость",
            "Позиций",
            "Цена за час",
            "Статус",
            "Крытый",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.display_venue().to_string(),
            self.sport.display_name().to_string(),
            self.surface.clone().unwrap_or_default(),
            self.level.to_string(),
            self.capacity.to_string(),
            self.sub_court_count.to_string(),
            format!("{:.0}", self.price_per_hour),
            self.status.display_name().to_string(),
            if self.is_indoor { "Да" } else { "Нет" }.to_string(),
        ]
    }
}

#[component]
pub fn CourtList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toast = use_toast();
    let state = create_state();
    let all_courts: RwSignal<Vec<Court>> = RwSignal::new(Vec::new());
    let venues: RwSignal<Vec<Venue>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let pending_delete: RwSignal<Option<Court>> = RwSignal::new(None);
    let filters_expanded = RwSignal::new(true);

    let filtered = move || {
        let mut data = all_courts.get_untracked();
        state.with_untracked(|s| {
            data.retain(|c| c.matches(&s.filter));
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
        });
        data
    };

    let refresh_view = move || {
        let data = filtered();
        state.update(|s| {
            let page = paginate(&data, s.page, s.page_size);
            s.items = page.items;
            s.page = page.page;
            s.total_pages = page.total_pages;
            s.total_count = page.total_count;
        });
    };

    let persist_prefs = move || {
        state.with_untracked(|s| {
            save_list_prefs(
                LIST_ID,
                &ListPrefs {
                    page_size: s.page_size,
                    sort_field: Some(s.sort_field.clone()),
                    sort_ascending: s.sort_ascending,
                },
            )
        });
    };

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_courts().await {
                Ok(data) => {
                    log::debug!("Loaded {} courts", data.len());
                    all_courts.set(data);
                    state.update(|s| s.is_loaded = true);
                    refresh_view();
                }
                Err(e) => toast.api_error("Не удалось загрузить корты", &e),
            }
            set_loading.set(false);
        });
    };

    let load_venues = move || {
        spawn_local(async move {
            match venue_api::fetch_venues().await {
                Ok(data) => venues.set(data),
                Err(e) => toast.api_error("Не удалось загрузить площадки", &e),
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_venues();
            load_data();
        }
    });

    // Изменение любого фильтра сбрасывает страницу на первую
    let update_filter = move |f: &dyn Fn(&mut CourtFilter)| {
        state.update(|s| {
            f(&mut s.filter);
            s.page = 0;
        });
        refresh_view();
    };

    let on_search = Callback::new(move |query: String| update_filter(&|f: &mut CourtFilter| f.query = query.clone()));

    let on_sort = Callback::new(move |field: String| {
        state.update(|s| toggle_sort_state(&mut s.sort_field, &mut s.sort_ascending, &field));
        persist_prefs();
        refresh_view();
    });

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        persist_prefs();
        refresh_view();
    };

    let open_details = move |court: Option<&Court>| {
        let key = detail_key("a002_court", court.map(|c| c.id.as_str()));
        let title = match court {
            Some(c) => detail_tab_label("a002_court", &c.name),
            None => tab_label_for_key(&key).to_string(),
        };
        tabs_store.open_tab(&key, &title);
    };

    // Быстрая смена статуса: применяем сразу, откатываем при ошибке
    let change_status = move |court: Court, status: CourtStatus| {
        if court.status == status {
            return;
        }
        let previous = court.status;
        let id = court.id.clone();
        let apply = move |id: &str, value: CourtStatus| {
            all_courts.update(|list| {
                if let Some(c) = list.iter_mut().find(|c| c.id == id) {
                    c.status = value;
                }
            });
            refresh_view();
        };
        apply(&id, status);
        spawn_local(async move {
            match api::update_status(&id, status).await {
                Ok(()) => toast.success(format!("«{}»: {}", court.name, status.display_name())),
                Err(e) => {
                    apply(&id, previous);
                    toast.api_error("Не удалось изменить статус", &e);
                }
            }
        });
    };

    let delete_court = Callback::new(move |court: Court| {
        spawn_local(async move {
            match api::delete_court(&court.id).await {
                Ok(()) => {
                    all_courts.update(|list| list.retain(|c| c.id != court.id));
                    refresh_view();
                    tabs_store.close_tab(&detail_key("a002_court", Some(&court.id)));
                    toast.success(format!("Корт «{}» удалён", court.name));
                }
                Err(e) => toast.api_error("Не удалось удалить корт", &e),
            }
        });
    });

    let export = move |_| {
        let data = filtered();
        if data.is_empty() {
            toast.info("Нет данных для выгрузки");
            return;
        }
        if let Err(e) = export_to_excel(&data, "courts") {
            toast.error(e);
        }
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));
    let venue_name = move |id: &str| {
        venues.with_untracked(|list| list.iter().find(|v| v.id == id).map(|v| v.name.clone()))
    };

    view! {
        <PageFrame page_id="a002_court--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Корты"</h1>
                    <Badge>{move || state.get().total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None)>
                        {icon("plus")}
                        " Новый корт"
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
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.filter.active_count()))
                    pagination=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.get().page)
                            total_pages=Signal::derive(move || state.get().total_pages)
                            total_count=Signal::derive(move || state.get().total_count)
                            page_size=Signal::derive(move || state.get().page_size)
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                        />
                    }
                    actions=move || view! {
                        <Button appearance=ButtonAppearance::Subtle on_click=export>
                            {icon("download")}
                            " Excel"
                        </Button>
                    }
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.filter.query.clone()))
                                on_change=on_search
                                placeholder="Название, площадка, покрытие..."
                            />
                        </div>
                        <select
                            class="form__select"
                            prop:value=move || state.with(|s| s.filter.venue_id.clone().unwrap_or_default())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                update_filter(&|f: &mut CourtFilter| f.venue_id = contracts::shared::text::non_empty(&value));
                            }
                        >
                            <option value="">"Все площадки"</option>
                            <For
                                each=move || venues.get()
                                key=|v| v.id.clone()
                                children=|v| view! { <option value=v.id.clone()>{v.name.clone()}</option> }
                            />
                        </select>
                        <select
                            class="form__select"
                            prop:value=move || state.with(|s| s.filter.sport.map(|x| x.code()).unwrap_or_default())
                            on:change=move |ev| {
                                let sport = SportType::from_code(&event_target_value(&ev));
                                update_filter(&|f: &mut CourtFilter| f.sport = sport);
                            }
                        >
                            <option value="">"Все виды спорта"</option>
                            {SportType::all().into_iter().map(|s| view! {
                                <option value=s.code()>{s.display_name()}</option>
                            }).collect_view()}
                        </select>
                        <select
                            class="form__select"
                            prop:value=move || state.with(|s| s.filter.status.map(|x| x.code()).unwrap_or_default())
                            on:change=move |ev| {
                                let status = CourtStatus::from_code(&event_target_value(&ev));
                                update_filter(&|f: &mut CourtFilter| f.status = status);
                            }
                        >
                            <option value="">"Все статусы"</option>
                            {CourtStatus::all().into_iter().map(|s| view! {
                                <option value=s.code()>{s.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </Flex>
                    <Flex gap=FlexGap::Small>
                        {move || state.with(|s| s.filter.venue_id.clone()).map(|id| {
                            let label = venue_name(&id).unwrap_or(id);
                            view! {
                                <FilterTag
                                    label=format!("Площадка: {}", label)
                                    on_remove=Callback::new(move |_| update_filter(&|f: &mut CourtFilter| f.venue_id = None))
                                />
                            }
                        })}
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Название" sort_field="name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Площадка" sort_field="venue" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Спорт" sort_field="sport" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Уровень" sort_field="level" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=80.0 align="right" />
                                <SortableHeaderCell label="Мест" sort_field="capacity" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=70.0 align="right" />
                                <SortableHeaderCell label="Позиций" sort_field="sub_court_count" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=80.0 align="right" />
                                <SortableHeaderCell label="Цена/час" sort_field="price" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=100.0 align="right" />
                                <SortableHeaderCell label="Статус" sort_field="status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=150.0 />
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|c| (c.id.clone(), c.status, c.updated_at.clone())
                                children=move |court| {
                                    let court_for_open = court.clone();
                                    let court_for_status = court.clone();
                                    let court_for_delete = court.clone();
                                    let status = court.status;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |ev| {
                                                            ev.prevent_default();
                                                            open_details(Some(&court_for_open));
                                                        }
                                                    >
                                                        {court.name.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{court.display_venue().to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{court.sport.display_name()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-right">{court.level}</TableCell>
                                            <TableCell class="text-right">{court.capacity}</TableCell>
                                            <TableCell class="text-right">
                                                {if court.sub_court_count > 0 { court.sub_court_count.to_string() } else { "-".to_string() }}
                                            </TableCell>
                                            <TableCell class="text-right">{format_thousands(court.price_per_hour)}</TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                                    <CourtStatusBadge status=status />
                                                    <select
                                                        class="form__select form__select--compact"
                                                        title="Сменить статус"
                                                        prop:value=status.code()
                                                        on:change=move |ev| {
                                                            if let Some(next) = CourtStatus::from_code(&event_target_value(&ev)) {
                                                                change_status(court_for_status.clone(), next);
                                                            }
                                                        }
                                                    >
                                                        {CourtStatus::all().into_iter().map(|s| view! {
                                                            <option value=s.code()>{s.display_name()}</option>
                                                        }).collect_view()}
                                                    </select>
                                                </Flex>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| pending_delete.set(Some(court_for_delete.clone()))
                                                    attr:title="Удалить"
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded && s.items.is_empty())>
                        <EmptyState message="Корты не найдены" hint="Измените фильтры или добавьте корт" icon_name="courts" />
                    </Show>
                </div>

                <ConfirmDialog
                    pending=pending_delete
                    title="Удаление корта"
                    message=Callback::new(|c: Court| {
                        if c.sub_court_count > 0 {
                            format!("Удалить корт «{}»? Привязки дочерних кортов к нему тоже будут удалены.", c.name)
                        } else {
                            format!("Удалить корт «{}»?", c.name)
                        }
                    })
                    on_confirm=delete_court
                />
            </div>
        </PageFrame>
    }
}
