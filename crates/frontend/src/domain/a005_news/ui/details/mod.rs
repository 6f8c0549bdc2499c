//! Форма новости
//!
//! - view_model.rs: состояние, автогенерация slug, загрузка/сохранение
//! - view.rs: разметка

mod view;
mod view_model;

pub use view::NewsDetails;
pub use view_model::NewsDetailsViewModel;
