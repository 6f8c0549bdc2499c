//! Маппинг корт-родитель / корт-потомок.
//!
//! - aggregate.rs: запись маппинга и DTO формы
//! - rules.rs: вычисление свободных позиций и проверка иерархии

pub mod aggregate;
pub mod rules;

pub use aggregate::{CourtMapping, CourtMappingDto};
pub use rules::MappingError;
