pub mod aggregate;

pub use aggregate::{NewsCategory, NewsCategoryDto};
