pub mod booking_status;
pub mod court_status;
pub mod news_status;
pub mod sport_type;
pub mod user_role;

pub use booking_status::BookingStatus;
pub use court_status::CourtStatus;
pub use news_status::NewsStatus;
pub use sport_type::SportType;
pub use user_role::UserRole;
