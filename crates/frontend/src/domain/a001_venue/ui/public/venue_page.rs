//! Карточка площадки `/venues/:id`: шапка, вкладки и боковые виджеты

use contracts::domain::a001_venue::Venue;
use contracts::domain::a002_court::Court;
use contracts::domain::a005_news::filter::latest_for_venue;
use contracts::domain::a005_news::News;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::domain::a001_venue::api;
use crate::domain::a002_court::api as court_api;
use crate::domain::a005_news::api as news_api;
use crate::shared::api::ApiError;
use crate::shared::api_utils::image_url;
use crate::shared::components::badge::CourtStatusBadge;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::image_gallery::ImageGallery;
use crate::shared::config::config;
use crate::shared::date_utils::{format_date, format_money};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::shared::toast::use_toast;

const RELATED_LIMIT: usize = 4;
const NEWS_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VenueTab {
    Overview,
    Courts,
    Gallery,
    News,
}

impl VenueTab {
    fn all() -> [VenueTab; 4] {
        [VenueTab::Overview, VenueTab::Courts, VenueTab::Gallery, VenueTab::News]
    }

    fn label(&self) -> &'static str {
        match self {
            VenueTab::Overview => "Обзор",
            VenueTab::Courts => "Корты",
            VenueTab::Gallery => "Фото",
            VenueTab::News => "Новости",
        }
    }
}

/// Все фото площадки и её кортов без повторов, обложка первой
fn gallery_images(venue: &Venue, courts: &[Court]) -> Vec<String> {
    let mut images: Vec<String> = Vec::new();
    let candidates = venue
        .cover()
        .into_iter()
        .map(str::to_string)
        .chain(venue.images.iter().cloned())
        .chain(courts.iter().flat_map(|c| c.images.iter().cloned()));
    for path in candidates {
        if !path.trim().is_empty() && !images.contains(&path) {
            images.push(path);
        }
    }
    images
}

/// Ответ для `requested` ещё актуален, если маршрут не ушёл на другую площадку
fn is_current_venue(route_id: Option<&str>, requested: &str) -> bool {
    route_id == Some(requested)
}

#[component]
pub fn VenuePage() -> impl IntoView {
    let params = use_params_map();
    let toast = use_toast();

    let venue: RwSignal<Option<Venue>> = RwSignal::new(None);
    let courts: RwSignal<Vec<Court>> = RwSignal::new(Vec::new());
    let news: RwSignal<Vec<News>> = RwSignal::new(Vec::new());
    let all_venues: RwSignal<Vec<Venue>> = RwSignal::new(Vec::new());
    let not_found = RwSignal::new(false);
    let active_tab = RwSignal::new(VenueTab::Overview);

    // Переход по «другим площадкам» меняет только параметр маршрута
    Effect::new(move |_| {
        let Some(id) = params.with(|p| p.get("id")) else {
            not_found.set(true);
            return;
        };
        venue.set(None);
        not_found.set(false);
        active_tab.set(VenueTab::Overview);

        courts.set(Vec::new());
        news.set(Vec::new());

        // ответы по уже покинутой площадке отбрасываются
        let current = move |id: &str| params.with_untracked(|p| is_current_venue(p.get("id").as_deref(), id));

        spawn_local(async move {
            let result = api::fetch_venue(&id).await;
            if !current(&id) {
                return;
            }
            match result {
                Ok(v) => venue.set(Some(v)),
                Err(ApiError::NotFound) => not_found.set(true),
                Err(e) => toast.api_error("Не удалось загрузить площадку", &e),
            }

            let result = court_api::fetch_venue_courts(&id).await;
            if !current(&id) {
                return;
            }
            match result {
                Ok(list) => courts.set(list),
                Err(e) => log::warn!("venue {} courts: {}", id, e),
            }

            let result = news_api::fetch_venue_news(&id).await;
            if !current(&id) {
                return;
            }
            match result {
                Ok(list) => news.set(list),
                Err(e) => log::warn!("venue {} news: {}", id, e),
            }

            if all_venues.with_untracked(|v| v.is_empty()) {
                match api::fetch_venues().await {
                    Ok(list) => all_venues.set(list),
                    Err(e) => log::warn!("venues for related widget: {}", e),
                }
            }
        });
    });

    let latest_news = Memo::new(move |_| {
        let Some(id) = venue.with(|v| v.as_ref().map(|v| v.id.clone())) else {
            return Vec::new();
        };
        news.with(|list| latest_for_venue(list, &id, NEWS_LIMIT).into_iter().cloned().collect::<Vec<_>>())
    });

    let related = Memo::new(move |_| {
        venue.with(|current| match current {
            Some(v) => all_venues.with(|all| v.related(all, RELATED_LIMIT).into_iter().cloned().collect::<Vec<_>>()),
            None => Vec::new(),
        })
    });

    let images = Signal::derive(move || {
        venue.with(|v| match v {
            Some(v) => courts.with(|c| gallery_images(v, c)),
            None => Vec::new(),
        })
    });

    view! {
        <PageFrame page_id="a001_venue--public" category=PAGE_CAT_PUBLIC>
            <Show when=move || not_found.get()>
                <EmptyState message="Площадка не найдена" hint="Возможно, она была закрыта" icon_name="venues" />
                <A href="/">"Все площадки"</A>
            </Show>

            {move || venue.get().map(|v| {
                let cover = v.cover().map(image_url);
                let venue_name = v.name.clone();
                let overview = v.clone();
                view! {
                    <header class="venue-hero">
                        {cover.map(|src| view! { <img class="venue-hero__cover" src=src alt=venue_name.clone() /> })}
                        <div class="venue-hero__info">
                            <h1 class="venue-hero__title">{v.name.clone()}</h1>
                            <div class="venue-hero__meta">
                                <span>{icon("venues")}{format!(" {}, {}", v.city, v.address)}</span>
                                {v.phone.clone().map(|p| view! {
                                    <a href=format!("tel:{}", p)>{p.clone()}</a>
                                })}
                                {v.opening_hours.clone().map(|h| view! { <span>{h}</span> })}
                            </div>
                        </div>
                    </header>

                    <div class="venue-layout">
                        <div class="venue-layout__main">
                            <nav class="venue-tabs">
                                {VenueTab::all().into_iter().map(|tab| view! {
                                    <button
                                        class=move || if active_tab.get() == tab {
                                            "venue-tabs__tab venue-tabs__tab--active"
                                        } else {
                                            "venue-tabs__tab"
                                        }
                                        on:click=move |_| active_tab.set(tab)
                                    >
                                        {tab.label()}
                                        {match tab {
                                            VenueTab::Courts => Some(view! { <span class="venue-tabs__count">{move || courts.with(|c| c.len())}</span> }),
                                            _ => None,
                                        }}
                                    </button>
                                }).collect_view()}
                            </nav>

                            <div class="venue-tabs__panel">
                                {move || match active_tab.get() {
                                    VenueTab::Overview => view! { <VenueOverview venue=overview.clone() /> }.into_any(),
                                    VenueTab::Courts => view! { <VenueCourts courts=courts /> }.into_any(),
                                    VenueTab::Gallery => view! { <ImageGallery images=images alt=overview.name.clone() /> }.into_any(),
                                    VenueTab::News => view! { <NewsFeed news=Signal::derive(move || news.get()) /> }.into_any(),
                                }}
                            </div>
                        </div>

                        <aside class="venue-layout__aside">
                            <div class="widget">
                                <h3 class="widget__title">"Последние новости"</h3>
                                <NewsFeed news=latest_news compact=true />
                            </div>
                            <div class="widget">
                                <h3 class="widget__title">"Другие площадки в городе"</h3>
                                <Show
                                    when=move || !related.with(|r| r.is_empty())
                                    fallback=|| view! { <p class="widget__empty">"Других площадок пока нет"</p> }
                                >
                                    <ul class="widget__list">
                                        <For
                                            each=move || related.get()
                                            key=|v| v.id.clone()
                                            children=|v| view! {
                                                <li>
                                                    <A href=format!("/venues/{}", v.id)>{v.name.clone()}</A>
                                                    <div class="widget__hint">{v.address.clone()}</div>
                                                </li>
                                            }
                                        />
                                    </ul>
                                </Show>
                            </div>
                        </aside>
                    </div>
                }
            })}
        </PageFrame>
    }
}

#[component]
fn VenueOverview(venue: Venue) -> impl IntoView {
    view! {
        <div class="venue-overview">
            <p class="venue-overview__description">
                {venue.description.clone().unwrap_or_else(|| "Описание площадки скоро появится.".to_string())}
            </p>
            {(!venue.amenities.is_empty()).then(|| view! {
                <h3>"Удобства"</h3>
                <ul class="venue-overview__amenities">
                    {venue.amenities.iter().map(|a| view! { <li>{icon("check")}{format!(" {}", a)}</li> }).collect_view()}
                </ul>
            })}
            {venue.latitude.zip(venue.longitude).map(|(lat, lon)| view! {
                <a
                    class="venue-overview__map"
                    href=format!("https://www.google.com/maps?q={},{}", lat, lon)
                    target="_blank"
                    rel="noopener"
                >
                    {icon("external")}" Открыть на карте"
                </a>
            })}
        </div>
    }
}

#[component]
fn VenueCourts(courts: RwSignal<Vec<Court>>) -> impl IntoView {
    let currency = config().currency;
    view! {
        <Show
            when=move || !courts.with(|c| c.is_empty())
            fallback=|| view! { <EmptyState message="Корты не добавлены" icon_name="courts" /> }
        >
            <div class="court-cards">
                <For
                    each=move || courts.get()
                    key=|c| (c.id.clone(), c.status)
                    children=move |court| view! {
                        <div class="court-card">
                            <div class="court-card__header">
                                <span class="court-card__name">{court.name.clone()}</span>
                                <CourtStatusBadge status=court.status />
                            </div>
                            <div class="court-card__meta">
                                <span>{court.sport.display_name()}</span>
                                {court.surface.clone().map(|s| view! { <span>{s}</span> })}
                                <span>{if court.is_indoor { "Крытый" } else { "Открытый" }}</span>
                                <span>{format!("до {} чел.", court.capacity)}</span>
                            </div>
                            <div class="court-card__price">
                                {format!("{} / час", format_money(court.price_per_hour, currency))}
                            </div>
                        </div>
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn NewsFeed(#[prop(into)] news: Signal<Vec<News>>, #[prop(optional)] compact: bool) -> impl IntoView {
    view! {
        <Show
            when=move || !news.with(|n| n.is_empty())
            fallback=|| view! { <p class="widget__empty">"Новостей пока нет"</p> }
        >
            <ul class=if compact { "news-feed news-feed--compact" } else { "news-feed" }>
                <For
                    each=move || news.get()
                    key=|n| n.id.clone()
                    children=move |item| view! {
                        <li class="news-feed__item">
                            {(!compact).then(|| item.cover_image.clone().map(|src| view! {
                                <img class="news-feed__cover" src=image_url(&src) alt="" loading="lazy" />
                            })).flatten()}
                            <div class="news-feed__body">
                                <div class="news-feed__title">{item.title.clone()}</div>
                                <div class="news-feed__date">{format_date(item.display_date())}</div>
                                {(!compact).then(|| item.summary.clone()).flatten().map(|s| view! {
                                    <p class="news-feed__summary">{s}</p>
                                })}
                            </div>
                        </li>
                    }
                />
            </ul>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_images_dedup_cover_first() {
        let venue = Venue {
            id: "v1".into(),
            cover_image: Some("cover.jpg".into()),
            images: vec!["a.jpg".into(), "cover.jpg".into(), " ".into()],
            ..Default::default()
        };
        let courts = vec![Court {
            images: vec!["c1.jpg".into(), "a.jpg".into()],
            ..Default::default()
        }];
        assert_eq!(gallery_images(&venue, &courts), vec!["cover.jpg", "a.jpg", "c1.jpg"]);
    }

    #[test]
    fn test_gallery_without_cover_uses_first_image() {
        let venue = Venue {
            images: vec!["x.jpg".into(), "y.jpg".into()],
            ..Default::default()
        };
        assert_eq!(gallery_images(&venue, &[]), vec!["x.jpg", "y.jpg"]);
    }

    #[test]
    fn test_stale_venue_response_is_dropped() {
        assert!(is_current_venue(Some("v1"), "v1"));
        // пользователь успел перейти на другую площадку
        assert!(!is_current_venue(Some("v2"), "v1"));
        assert!(!is_current_venue(None, "v1"));
    }
}
