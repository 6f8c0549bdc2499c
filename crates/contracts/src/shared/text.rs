//! Текстовые помощники: slug, поиск без учёта регистра, проверка email и времени

/// Поиск подстроки без учёта регистра. Пустой запрос совпадает со всем.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Как `contains_ci`, но для необязательных полей: `None` не совпадает с непустым запросом.
pub fn contains_ci_opt(haystack: Option<&str>, needle: &str) -> bool {
    match haystack {
        Some(h) => contains_ci(h, needle),
        None => needle.trim().is_empty(),
    }
}

fn transliterate(c: char) -> Option<&'static str> {
    let s = match c {
        'а' => "a", 'б' => "b", 'в' => "v", 'г' => "g", 'д' => "d",
        'е' | 'ё' | 'э' => "e", 'ж' => "zh", 'з' => "z", 'и' | 'й' => "i",
        'к' => "k", 'л' => "l", 'м' => "m", 'н' => "n", 'о' => "o",
        'п' => "p", 'р' => "r", 'с' => "s", 'т' => "t", 'у' => "u",
        'ф' => "f", 'х' => "kh", 'ц' => "ts", 'ч' => "ch", 'ш' => "sh",
        'щ' => "shch", 'ы' => "y", 'ю' => "yu", 'я' => "ya",
        'ъ' | 'ь' => "",
        // комбинируемые диакритические знаки (NFD): буква уже выведена
        '\u{300}'..='\u{36f}' => "",
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ'
        | 'â' | 'ầ' | 'ấ' | 'ẩ' | 'ẫ' | 'ậ' | 'ä' | 'å' => "a",
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' | 'ë' => "e",
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' | 'ï' => "i",
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ'
        | 'ơ' | 'ờ' | 'ớ' | 'ở' | 'ỡ' | 'ợ' | 'ö' => "o",
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' | 'ü' => "u",
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => "y",
        'đ' => "d",
        'ñ' => "n",
        'ç' => "c",
        'ø' => "o",
        'ß' => "ss",
        _ => return None,
    };
    Some(s)
}

/// Строит URL-slug из заголовка: латиница в нижнем регистре, цифры и одиночные дефисы.
///
/// Кириллица транслитерируется, диакритика вьетнамского/латиницы снимается,
/// остальные символы схлопываются в один `-`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.to_lowercase().chars() {
        let piece: Option<String> = if c.is_ascii_alphanumeric() {
            Some(c.to_string())
        } else {
            transliterate(c).map(str::to_string)
        };

        match piece {
            Some(p) if p.is_empty() => {}
            Some(p) => {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push_str(&p);
            }
            None => pending_dash = true,
        }
    }

    slug
}

/// Slug допустим, если состоит из `[a-z0-9-]`, не начинается и не заканчивается дефисом
/// и не содержит двойных дефисов.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
}

/// Упрощённая проверка email: одна `@`, непустые части, точка в домене.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

/// Пустая строка формы → `None`, иначе обрезанное значение
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Разбирает время "HH:MM" в минуты от полуночи
pub fn parse_hhmm(value: &str) -> Option<u32> {
    let (h, m) = value.trim().split_once(':')?;
    if h.len() != 2 || m.len() != 2 {
        return None;
    }
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_latin() {
        assert_eq!(slugify("Grand Opening: Court #5!"), "grand-opening-court-5");
        assert_eq!(slugify("  --Hello   World--  "), "hello-world");
    }

    #[test]
    fn test_slugify_cyrillic_and_vietnamese() {
        assert_eq!(slugify("Открытие сезона 2025"), "otkrytie-sezona-2025");
        assert_eq!(slugify("Sân cầu lông Đà Nẵng"), "san-cau-long-da-nang");
        assert_eq!(slugify("Подъезд"), "podezd");
    }

    #[test]
    fn test_slugify_decomposed_vietnamese() {
        // ввод в NFD: базовая буква и отдельный знак
        assert_eq!(slugify("Sa\u{302}n ca\u{302}\u{300}u lo\u{302}ng"), "san-cau-long");
        assert_eq!(slugify("Sa\u{302}n"), "san");
        assert_eq!(slugify("Đa\u{300} Na\u{306}\u{303}ng"), "da-nang");
    }

    #[test]
    fn test_slugify_other_latin_letters() {
        assert_eq!(slugify("Niño Café"), "nino-cafe");
        assert_eq!(slugify("Façade Straße"), "facade-strasse");
    }

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("summer-cup-2025"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug("Upper"));
        assert!(is_valid_slug(&slugify("Любой заголовок!")));
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Центральный Корт", "корт"));
        assert!(contains_ci("anything", "   "));
        assert!(!contains_ci("Court A", "b"));
        assert!(!contains_ci_opt(None, "x"));
        assert!(contains_ci_opt(None, ""));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("admin@club.vn"));
        assert!(!is_valid_email("admin@club"));
        assert!(!is_valid_email("@club.vn"));
        assert!(!is_valid_email("a b@club.vn"));
        assert!(!is_valid_email("a@b@c.vn"));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  x "), Some("x".to_string()));
        assert_eq!(non_empty("   "), None);
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("06:30"), Some(390));
        assert_eq!(parse_hhmm("23:59"), Some(1439));
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("6:30"), None);
        assert_eq!(parse_hhmm("junk"), None);
    }
}
