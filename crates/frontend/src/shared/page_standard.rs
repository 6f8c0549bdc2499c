//! Категории страниц.
//!
//! Каждая страница объявляет:
//!   - HTML `id` в формате `{entity}--{category}` (например `"a002_court--list"`)
//!   - `data-page-category` с одной из констант ниже
//!
//! По id из DOM-инспектора легко найти модуль `domain/a002_court/`.

/// Список записей: таблица с фильтрами и пагинацией.
pub const PAGE_CAT_LIST: &str = "list";

/// Форма просмотра/редактирования одной записи.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Системные страницы администрирования (пользователи, настройки).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Публичные страницы сайта вне админки.
pub const PAGE_CAT_PUBLIC: &str = "public";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_PUBLIC,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && !cat.is_empty())
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_court--list"));
        assert!(!is_valid_page_id("a002_court"));
        assert!(!is_valid_page_id("--list"));
        assert!(is_known_category(PAGE_CAT_PUBLIC));
        assert!(!is_known_category("dashboard"));
    }
}
