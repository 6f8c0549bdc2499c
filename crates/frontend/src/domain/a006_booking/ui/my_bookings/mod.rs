//! «Мои бронирования»: вкладки по статусу, предстоящие и прошедшие, отмена

use contracts::domain::a006_booking::aggregate::sort_for_display;
use contracts::domain::a006_booking::{Booking, BookingStatusFilter};
use contracts::enums::BookingStatus;
use contracts::system::settings::BookingSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a006_booking::api;
use crate::shared::components::badge::BookingStatusBadge;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::config::config;
use crate::shared::date_utils::{format_date, format_datetime, format_money, now_local};
use crate::shared::export::{export_to_excel, ExcelExportable};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::shared::toast::use_toast;

impl ExcelExportable for Booking {
    fn headers() -> Vec<&'static str> {
        vec!["Дата", "Время", "Корт", "Площадка", "Статус", "Стоимость", "Комментарий", "Создано"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_date(&self.booking_date),
            self.time_range(),
            self.court_name.clone(),
            self.venue_name.clone().unwrap_or_default(),
            self.status.display_name().to_string(),
            format!("{:.0}", self.total_price),
            self.note.clone().unwrap_or_default(),
            format_datetime(&self.created_at),
        ]
    }
}

/// Брони вкладки, разделённые на предстоящие и прошедшие, в порядке показа
fn split_for_tab(
    bookings: &[Booking],
    filter: BookingStatusFilter,
    now: chrono::NaiveDateTime,
) -> (Vec<Booking>, Vec<Booking>) {
    let mut items: Vec<Booking> = bookings.iter().filter(|b| filter.matches(b, now)).cloned().collect();
    sort_for_display(&mut items, now);
    items.into_iter().partition(|b| b.is_upcoming(now))
}

/// Что показать на карточке: кнопку отмены или подсказку, что уже поздно
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CancelState {
    can_cancel: bool,
    too_late: bool,
}

fn cancel_state(booking: &Booking, now: chrono::NaiveDateTime, cancellation_hours: u32) -> CancelState {
    let can_cancel = booking.can_cancel(now, cancellation_hours);
    CancelState {
        can_cancel,
        too_late: booking.status.is_cancellable() && booking.is_upcoming(now) && !can_cancel,
    }
}

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let toast = use_toast();
    let bookings: RwSignal<Vec<Booking>> = RwSignal::new(Vec::new());
    let rules = RwSignal::new(BookingSettings::default());
    let filter = RwSignal::new(BookingStatusFilter::All);
    let pending_cancel: RwSignal<Option<Booking>> = RwSignal::new(None);
    let (loading, set_loading) = signal(false);
    let (loaded, set_loaded) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_my_bookings().await {
                Ok(data) => {
                    bookings.set(data);
                    set_loaded.set(true);
                }
                Err(e) => toast.api_error("Не удалось загрузить бронирования", &e),
            }
            set_loading.set(false);
        });
    };

    spawn_local(async move {
        match api::fetch_booking_rules().await {
            Ok(settings) => rules.set(settings),
            // без настроек используем окно отмены по умолчанию
            Err(e) => log::warn!("booking rules unavailable: {}", e),
        }
    });
    load_data();

    let sections = Memo::new(move |_| {
        let now = now_local();
        bookings.with(|list| split_for_tab(list, filter.get(), now))
    });

    let count_for = move |tab: BookingStatusFilter| {
        let now = now_local();
        bookings.with(|list| list.iter().filter(|b| tab.matches(b, now)).count())
    };

    let cancel = Callback::new(move |booking: Booking| {
        spawn_local(async move {
            match api::cancel_booking(&booking.id).await {
                Ok(()) => {
                    bookings.update(|list| {
                        if let Some(b) = list.iter_mut().find(|b| b.id == booking.id) {
                            b.status = BookingStatus::Cancelled;
                        }
                    });
                    toast.success("Бронирование отменено");
                }
                Err(e) => toast.api_error("Не удалось отменить бронирование", &e),
            }
        });
    });

    let export = move |_| {
        let (mut upcoming, past) = sections.get_untracked();
        upcoming.extend(past);
        if upcoming.is_empty() {
            toast.info("Нет бронирований для выгрузки");
            return;
        }
        if let Err(e) = export_to_excel(&upcoming, "my_bookings") {
            toast.error(e);
        }
    };

    let card = move |booking: Booking, cancellation_hours: u32| {
        let CancelState { can_cancel, too_late } =
            cancel_state(&booking, now_local(), cancellation_hours);
        let for_cancel = booking.clone();
        view! {
            <div class="booking-card">
                <div class="booking-card__when">
                    <div class="booking-card__date">{format_date(&booking.booking_date)}</div>
                    <div class="booking-card__time">{booking.time_range()}</div>
                </div>
                <div class="booking-card__what">
                    <div class="booking-card__court">{booking.court_name.clone()}</div>
                    {booking.venue_id.clone().map(|venue_id| view! {
                        <A href=format!("/venues/{}", venue_id) attr:class="booking-card__venue">
                            {booking.venue_name.clone().unwrap_or_else(|| "Площадка".to_string())}
                        </A>
                    })}
                    {booking.note.clone().map(|n| view! { <div class="booking-card__note">{n}</div> })}
                </div>
                <div class="booking-card__side">
                    <BookingStatusBadge status=booking.status />
                    <div class="booking-card__price">{format_money(booking.total_price, config().currency)}</div>
                    {can_cancel.then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| pending_cancel.set(Some(for_cancel.clone()))
                        >
                            "Отменить"
                        </Button>
                    })}
                    {too_late.then(|| view! {
                        <div class="booking-card__hint">
                            {format!("Отмена возможна не позднее чем за {} ч", cancellation_hours)}
                        </div>
                    })}
                </div>
            </div>
        }
    };

    view! {
        <PageFrame page_id="a006_booking--my" category=PAGE_CAT_PUBLIC>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Мои бронирования"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Subtle on_click=export>
                        {icon("download")}
                        " Excel"
                    </Button>
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

            <nav class="status-tabs">
                {BookingStatusFilter::tabs().into_iter().map(|tab| view! {
                    <button
                        class=move || if filter.get() == tab { "status-tabs__tab status-tabs__tab--active" } else { "status-tabs__tab" }
                        on:click=move |_| filter.set(tab)
                    >
                        {tab.label()}
                        <span class="status-tabs__count">{move || count_for(tab)}</span>
                    </button>
                }).collect_view()}
            </nav>

            <Show when=move || !sections.with(|(u, _)| u.is_empty())>
                <section class="booking-section">
                    <h2 class="booking-section__title">"Предстоящие"</h2>
                    {move || {
                        let hours = rules.with(|r| r.cancellation_hours);
                        sections.get().0.into_iter().map(|b| card(b, hours)).collect_view()
                    }}
                </section>
            </Show>
            <Show when=move || !sections.with(|(_, p)| p.is_empty())>
                <section class="booking-section">
                    <h2 class="booking-section__title">"Прошедшие и отменённые"</h2>
                    {move || {
                        let hours = rules.with(|r| r.cancellation_hours);
                        sections.get().1.into_iter().map(|b| card(b, hours)).collect_view()
                    }}
                </section>
            </Show>
            <Show when=move || loaded.get() && sections.with(|(u, p)| u.is_empty() && p.is_empty())>
                <EmptyState message="Бронирований нет" hint="Выберите площадку и забронируйте корт" icon_name="bookings" />
                <A href="/">"К площадкам"</A>
            </Show>

            <ConfirmDialog
                pending=pending_cancel
                title="Отмена бронирования"
                message=Callback::new(|b: Booking| {
                    format!("Отменить бронь корта «{}» на {} {}?", b.court_name, format_date(&b.booking_date), b.time_range())
                })
                confirm_label="Отменить бронь"
                on_confirm=cancel
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking(id: &str, date: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.into(),
            court_name: "Court".into(),
            booking_date: date.into(),
            start_time: "10:00".into(),
            end_time: "11:00".into(),
            status,
            ..Default::default()
        }
    }

    fn now() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_split_for_all_tab() {
        let list = vec![
            booking("past", "2025-06-01", BookingStatus::Completed),
            booking("far", "2025-07-01", BookingStatus::Confirmed),
            booking("near", "2025-06-16", BookingStatus::Pending),
            booking("cancelled", "2025-06-20", BookingStatus::Cancelled),
        ];
        let (upcoming, past) = split_for_tab(&list, BookingStatusFilter::All, now());
        let up: Vec<&str> = upcoming.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(up, vec!["near", "far"]);
        assert_eq!(past.len(), 2);
    }

    #[test]
    fn test_split_for_cancelled_tab() {
        let list = vec![
            booking("a", "2025-06-20", BookingStatus::Cancelled),
            booking("b", "2025-06-20", BookingStatus::Confirmed),
        ];
        let (upcoming, past) = split_for_tab(&list, BookingStatusFilter::Status(BookingStatus::Cancelled), now());
        assert!(upcoming.is_empty());
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].id, "a");
    }

    #[test]
    fn test_cancel_state_follows_loaded_window() {
        // бронь через 20 ч: при окне 24 ч уже поздно, при окне 12 ч ещё можно
        let b = booking("soon", "2025-06-16", BookingStatus::Confirmed);
        let b = Booking { start_time: "08:00".into(), ..b };

        let default_window = cancel_state(&b, now(), BookingSettings::default().cancellation_hours);
        assert_eq!(default_window, CancelState { can_cancel: false, too_late: true });

        let loaded_window = cancel_state(&b, now(), 12);
        assert_eq!(loaded_window, CancelState { can_cancel: true, too_late: false });
    }

    #[test]
    fn test_cancel_state_for_finished_booking() {
        let b = booking("past", "2025-06-01", BookingStatus::Confirmed);
        assert_eq!(cancel_state(&b, now(), 0), CancelState { can_cancel: false, too_late: false });
    }
}
