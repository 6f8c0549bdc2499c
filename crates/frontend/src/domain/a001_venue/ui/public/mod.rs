//! Публичные страницы площадок: каталог и карточка площадки

mod index;
mod venue_page;

pub use index::VenueIndexPage;
pub use venue_page::VenuePage;
