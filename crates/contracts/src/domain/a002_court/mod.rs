pub mod aggregate;
pub mod filter;

pub use aggregate::{Court, CourtDto, CourtStatusPatch};
pub use filter::CourtFilter;
