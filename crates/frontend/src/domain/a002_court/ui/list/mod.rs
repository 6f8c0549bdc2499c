mod state;
mod view;

pub use view::CourtList;
