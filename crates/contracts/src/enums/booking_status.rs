use serde::{Deserialize, Serialize};

/// Статус бронирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Ожидает",
            BookingStatus::Confirmed => "Подтверждено",
            BookingStatus::Completed => "Завершено",
            BookingStatus::Cancelled => "Отменено",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "warning",
            BookingStatus::Confirmed => "primary",
            BookingStatus::Completed => "success",
            BookingStatus::Cancelled => "error",
        }
    }

    /// Отмена возможна только для ещё не состоявшихся броней
    pub fn is_cancellable(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    pub fn all() -> Vec<BookingStatus> {
        vec![
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}
