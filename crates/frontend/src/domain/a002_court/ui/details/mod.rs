//! Форма корта (создание/редактирование)
//!
//! - view_model.rs: состояние формы, загрузка и сохранение
//! - view.rs: разметка

mod view;
mod view_model;

pub use view::CourtDetails;
pub use view_model::CourtDetailsViewModel;
