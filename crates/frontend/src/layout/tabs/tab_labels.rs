//! Заголовки вкладок

use super::parse_detail_key;

/// Читаемый заголовок вкладки по ключу. Fallback: сам ключ не показываем, даём общий текст.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_venue" => "Площадки",
        "a002_court" => "Корты",
        "a003_court_mapping" => "Схема кортов",
        "a004_news_category" => "Категории новостей",
        "a005_news" => "Новости",
        "sys_users" => "Пользователи",
        "sys_settings" => "Настройки",
        other => match parse_detail_key(other) {
            Some((entity, None)) => new_element_label(entity),
            Some((entity, Some(_))) => element_name(entity),
            None => "Раздел",
        },
    }
}

/// Название одного элемента сущности (для вкладок форм)
pub fn element_name(entity: &str) -> &'static str {
    match entity {
        "a002_court" => "Корт",
        "a003_court_mapping" => "Привязка корта",
        "a005_news" => "Новость",
        _ => "Запись",
    }
}

fn new_element_label(entity: &str) -> &'static str {
    match entity {
        "a002_court" => "Новый корт",
        "a003_court_mapping" => "Новая привязка",
        "a005_news" => "Новая новость",
        _ => "Новая запись",
    }
}

/// Заголовок вкладки формы: «<сущность> · <идентификатор>».
pub fn detail_tab_label(entity: &str, identifier: &str) -> String {
    format!("{} · {}", element_name(entity), identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a002_court"), "Корты");
        assert_eq!(tab_label_for_key("a005_news_detail_new"), "Новая новость");
        assert_eq!(tab_label_for_key("a002_court_detail_c1"), "Корт");
        assert_eq!(tab_label_for_key("nope"), "Раздел");
        assert_eq!(detail_tab_label("a002_court", "Корт 1"), "Корт · Корт 1");
    }
}
