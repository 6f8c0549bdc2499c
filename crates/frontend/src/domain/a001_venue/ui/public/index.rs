use contracts::domain::a001_venue::Venue;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::a001_venue::api;
use crate::shared::api_utils::image_url;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ci, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::shared::toast::use_toast;

/// Каталог активных площадок
#[component]
pub fn VenueIndexPage() -> impl IntoView {
    let toast = use_toast();
    let venues: RwSignal<Vec<Venue>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let (loaded, set_loaded) = signal(false);

    spawn_local(async move {
        match api::fetch_venues().await {
            Ok(mut data) => {
                data.retain(|v| v.is_active);
                data.sort_by(|a, b| cmp_ci(&a.name, &b.name));
                venues.set(data);
            }
            Err(e) => toast.api_error("Не удалось загрузить площадки", &e),
        }
        set_loaded.set(true);
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
        <PageFrame page_id="a001_venue--index" category=PAGE_CAT_PUBLIC>
            <section class="venue-index">
                <h1 class="venue-index__title">"Площадки"</h1>
                <div class="venue-index__search">
                    <SearchInput
                        value=Signal::derive(move || search.get())
                        on_change=Callback::new(move |q| search.set(q))
                        placeholder="Город или название..."
                    />
                </div>
                <div class="venue-grid">
                    <For
                        each=visible
                        key=|v| v.id.clone()
                        children=|venue| {
                            let cover = venue.cover().map(image_url).unwrap_or_else(|| image_url(""));
                            view! {
                                <A href=format!("/venues/{}", venue.id) attr:class="venue-card">
                                    <img class="venue-card__cover" src=cover alt=venue.name.clone() loading="lazy" />
                                    <div class="venue-card__body">
                                        <div class="venue-card__name">{venue.name.clone()}</div>
                                        <div class="venue-card__address">
                                            {icon("venues")}
                                            {format!(" {}, {}", venue.city, venue.address)}
                                        </div>
                                    </div>
                                </A>
                            }
                        }
                    />
                </div>
                <Show when=move || loaded.get() && visible().is_empty()>
                    <EmptyState message="Площадки не найдены" icon_name="venues" />
                </Show>
            </section>
        </PageFrame>
    }
}
