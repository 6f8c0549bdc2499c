pub mod list;
pub mod public;
