//! Площадки в админке: только просмотр, карточка открывается на публичной странице

use contracts::domain::a001_venue::Venue;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_venue::api;
use crate::shared::components::badge::ActiveBadge;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ci, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;

#[component]
pub fn VenueList() -> impl IntoView {
    let toast = use_toast();
    let venues: RwSignal<Vec<Venue>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);
    let (loaded, set_loaded) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_venues().await {
                Ok(mut data) => {
                    data.sort_by(|a, b| cmp_ci(&a.city, &b.city).then_with(|| cmp_ci(&a.name, &b.name)));
                    venues.set(data);
                    set_loaded.set(true);
                }
                Err(e) => toast.api_error("Не удалось загрузить площадки", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !loaded.get_untracked() {
            load_data();
        }
    });

    let visible = move || {
        let query = search.get();
        venues.with(|list| {
            list.iter()
                .filter(|v| v.matches_query(query.trim()))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <PageFrame page_id="a001_venue--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Площадки"</h1>
                    <Badge>{move || venues.with(|v| v.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Обновить"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div style="max-width: 320px; margin-bottom: 12px;">
                    <SearchInput
                        value=Signal::derive(move || search.get())
                        on_change=Callback::new(move |q| search.set(q))
                        placeholder="Название, город, адрес..."
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=200.0>"Название"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Город"</TableHeaderCell>
                                <TableHeaderCell min_width=240.0>"Адрес"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Телефон"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Часы работы"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Статус"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=visible
                                key=|v| (v.id.clone(), v.updated_at.clone())
                                children=|venue| view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{venue.name.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{venue.city.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{venue.address.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{venue.phone.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{venue.opening_hours.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                        <TableCell><ActiveBadge active=venue.is_active /></TableCell>
                                        <TableCell>
                                            <a
                                                class="button button--icon"
                                                href=format!("/venues/{}", venue.id)
                                                target="_blank"
                                                title="Открыть страницу площадки"
                                            >
                                                {icon("external")}
                                            </a>
                                        </TableCell>
                                    </TableRow>
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || loaded.get() && visible().is_empty()>
                        <EmptyState message="Площадки не найдены" icon_name="venues" />
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
