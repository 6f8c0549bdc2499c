mod view;
mod view_model;

pub use view::CourtMappingDetails;
pub use view_model::CourtMappingDetailsViewModel;
