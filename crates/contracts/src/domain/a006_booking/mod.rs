pub mod aggregate;

pub use aggregate::{Booking, BookingStatusFilter};
