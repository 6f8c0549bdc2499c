use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::enums::BookingStatus;

/// Бронирование корта текущим пользователем (`/bookings/my-bookings`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Booking {
    pub id: String,
    pub court_id: String,
    #[serde(default)]
    pub court_name: String,
    #[serde(default)]
    pub venue_id: Option<String>,
    #[serde(default)]
    pub venue_name: Option<String>,
    /// "YYYY-MM-DD"
    pub booking_date: String,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
    pub status: BookingStatus,
    pub total_price: f64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Booking {
    /// Начало брони; `None`, если дата или время не разбираются
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.booking_date.trim(), "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(self.start_time.trim(), "%H:%M").ok()?;
        Some(date.and_time(time))
    }

    /// Предстоящая: начинается позже `now` и не отменена
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.status != BookingStatus::Cancelled
            && self.starts_at().map(|s| s > now).unwrap_or(false)
    }

    /// Можно ли отменить бронь с учётом окна отмены (часов до начала)
    pub fn can_cancel(&self, now: NaiveDateTime, cancellation_hours: u32) -> bool {
        if !self.status.is_cancellable() {
            return false;
        }
        match self.starts_at() {
            Some(start) => start - now >= chrono::Duration::hours(i64::from(cancellation_hours)),
            None => false,
        }
    }

    pub fn time_range(&self) -> String {
        format!("{}–{}", self.start_time, self.end_time)
    }
}

/// Вкладки фильтра на странице «Мои бронирования»
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingStatusFilter {
    #[default]
    All,
    Upcoming,
    Past,
    Status(BookingStatus),
}

impl BookingStatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatusFilter::All => "Все",
            BookingStatusFilter::Upcoming => "Предстоящие",
            BookingStatusFilter::Past => "Прошедшие",
            BookingStatusFilter::Status(s) => s.display_name(),
        }
    }

    pub fn matches(&self, booking: &Booking, now: NaiveDateTime) -> bool {
        match self {
            BookingStatusFilter::All => true,
            BookingStatusFilter::Upcoming => booking.is_upcoming(now),
            BookingStatusFilter::Past => {
                booking.status != BookingStatus::Cancelled && !booking.is_upcoming(now)
            }
            BookingStatusFilter::Status(s) => booking.status == *s,
        }
    }

    pub fn tabs() -> Vec<BookingStatusFilter> {
        vec![
            BookingStatusFilter::All,
            BookingStatusFilter::Upcoming,
            BookingStatusFilter::Past,
            BookingStatusFilter::Status(BookingStatus::Cancelled),
        ]
    }
}

/// Сортировка: ближайшие предстоящие первыми, затем прошедшие от новых к старым
pub fn sort_for_display(items: &mut [Booking], now: NaiveDateTime) {
    items.sort_by(|a, b| {
        let (ua, ub) = (a.is_upcoming(now), b.is_upcoming(now));
        match (ua, ub) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            (true, true) => a.starts_at().cmp(&b.starts_at()),
            (false, false) => b.starts_at().cmp(&a.starts_at()),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, date: &str, start: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.into(),
            court_id: "c1".into(),
            booking_date: date.into(),
            start_time: start.into(),
            end_time: "23:00".into(),
            status,
            ..Default::default()
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn test_upcoming_and_past() {
        let future = booking("f", "2025-06-11", "08:00", BookingStatus::Confirmed);
        let past = booking("p", "2025-06-09", "08:00", BookingStatus::Completed);
        let cancelled = booking("c", "2025-06-12", "08:00", BookingStatus::Cancelled);

        assert!(BookingStatusFilter::Upcoming.matches(&future, now()));
        assert!(!BookingStatusFilter::Upcoming.matches(&cancelled, now()));
        assert!(BookingStatusFilter::Past.matches(&past, now()));
        assert!(!BookingStatusFilter::Past.matches(&cancelled, now()));
        assert!(BookingStatusFilter::Status(BookingStatus::Cancelled).matches(&cancelled, now()));
    }

    #[test]
    fn test_cancellation_window() {
        let soon = booking("s", "2025-06-10", "14:00", BookingStatus::Pending);
        assert!(soon.can_cancel(now(), 2));
        assert!(!soon.can_cancel(now(), 3));

        let done = booking("d", "2025-06-20", "14:00", BookingStatus::Completed);
        assert!(!done.can_cancel(now(), 0));

        let broken = booking("b", "not-a-date", "14:00", BookingStatus::Pending);
        assert!(!broken.can_cancel(now(), 0));
    }

    #[test]
    fn test_sort_for_display() {
        let mut items = vec![
            booking("past-old", "2025-06-01", "10:00", BookingStatus::Completed),
            booking("up-late", "2025-06-20", "10:00", BookingStatus::Confirmed),
            booking("past-new", "2025-06-09", "10:00", BookingStatus::Completed),
            booking("up-soon", "2025-06-11", "10:00", BookingStatus::Pending),
        ];
        sort_for_display(&mut items, now());
        let ids: Vec<_> = items.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["up-soon", "up-late", "past-new", "past-old"]);
    }
}
