pub mod aggregate;
pub mod filter;

pub use aggregate::{News, NewsDto, NewsPatch};
pub use filter::NewsFilter;
