/// Утилиты форматирования дат, времени и денежных сумм
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Format ISO datetime string to DD.MM.YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let time: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, time);
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// "14:00:00" -> "14:00"
pub fn format_time(time_str: &str) -> String {
    NaiveTime::parse_from_str(time_str, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time_str, "%H:%M"))
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|_| time_str.to_string())
}

/// Разбор ISO даты-времени с зоной или без неё
pub fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok())
}

/// Текущее локальное время браузера
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Разделитель тысяч (пробел), без дробной части
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    format!("{}{}", sign, out)
}

/// Денежная сумма с кодом валюты: 150000 VND -> "150 000 ₫"
pub fn format_money(value: f64, currency: &str) -> String {
    let symbol = match currency {
        "VND" => "₫",
        "USD" => "$",
        "EUR" => "€",
        "RUB" => "₽",
        other => other,
    };
    format!("{} {}", format_thousands(value), symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_time("noon"), "noon");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("14:00:00"), "14:00");
        assert_eq!(format_time("07:30"), "07:30");
    }

    #[test]
    fn test_parse_iso_datetime() {
        let dt = parse_iso_datetime("2024-03-15T14:02:26Z");
        assert_eq!(
            dt.map(|d| d.format("%Y-%m-%d %H:%M").to_string()),
            Some("2024-03-15 14:02".to_string())
        );
        assert!(parse_iso_datetime("2024-03-15T14:02:26").is_some());
        assert!(parse_iso_datetime("garbage").is_none());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_thousands(1234567.0), "1 234 567");
        assert_eq!(format_thousands(-1500.0), "-1 500");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_money(150000.0, "VND"), "150 000 ₫");
        assert_eq!(format_money(12.0, "THB"), "12 THB");
    }
}
