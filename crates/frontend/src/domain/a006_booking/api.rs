use contracts::domain::a006_booking::Booking;
use contracts::system::settings::BookingSettings;

use crate::shared::api::{self, ApiError};

pub async fn fetch_my_bookings() -> Result<Vec<Booking>, ApiError> {
    api::get_json("/api/bookings/my-bookings").await
}

/// Правила бронирования нужны ради окна отмены
pub async fn fetch_booking_rules() -> Result<BookingSettings, ApiError> {
    api::get_json("/api/settings/booking").await
}

pub async fn cancel_booking(id: &str) -> Result<(), ApiError> {
    api::patch_json(&format!("/api/bookings/{}/cancel", id), &serde_json::json!({})).await
}
