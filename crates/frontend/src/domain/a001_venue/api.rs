use contracts::domain::a001_venue::Venue;

use crate::shared::api::{self, ApiError};

pub async fn fetch_venues() -> Result<Vec<Venue>, ApiError> {
    api::get_json("/api/venues").await
}

pub async fn fetch_venue(id: &str) -> Result<Venue, ApiError> {
    api::get_json(&format!("/api/venues/{}", id)).await
}
