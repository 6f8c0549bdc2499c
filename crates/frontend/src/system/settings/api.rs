use contracts::system::settings::{BookingSettings, GeneralSettings};

use crate::shared::api::{self, ApiError};

pub async fn fetch_general() -> Result<GeneralSettings, ApiError> {
    api::get_json("/api/settings/general").await
}

pub async fn save_general(settings: &GeneralSettings) -> Result<(), ApiError> {
    api::put_json("/api/settings/general", settings).await
}

pub async fn fetch_booking() -> Result<BookingSettings, ApiError> {
    api::get_json("/api/settings/booking").await
}

pub async fn save_booking(settings: &BookingSettings) -> Result<(), ApiError> {
    api::put_json("/api/settings/booking", settings).await
}
