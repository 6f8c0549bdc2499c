pub mod a001_venue;
pub mod a002_court;
pub mod a003_court_mapping;
pub mod a004_news_category;
pub mod a005_news;
pub mod a006_booking;
