//! Системные настройки (`/settings/general`, `/settings/booking`)

use serde::{Deserialize, Serialize};

use crate::shared::text::{is_valid_email, parse_hhmm};

/// Общие настройки сайта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub site_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub currency: String,
    pub timezone: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            site_name: String::new(),
            contact_email: String::new(),
            contact_phone: None,
            address: None,
            currency: "VND".to_string(),
            timezone: "Asia/Ho_Chi_Minh".to_string(),
        }
    }
}

impl GeneralSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.site_name.trim().is_empty() {
            return Err("Название сайта обязательно".into());
        }
        if !is_valid_email(&self.contact_email) {
            return Err("Некорректный контактный email".into());
        }
        if self.currency.trim().len() != 3 {
            return Err("Код валюты должен состоять из 3 букв".into());
        }
        Ok(())
    }
}

/// Правила бронирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSettings {
    /// "HH:MM"
    pub open_time: String,
    /// "HH:MM"
    pub close_time: String,
    pub slot_minutes: u32,
    pub min_booking_minutes: u32,
    pub max_booking_minutes: u32,
    pub max_advance_days: u32,
    pub cancellation_hours: u32,
    pub allow_guest_booking: bool,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            open_time: "06:00".to_string(),
            close_time: "22:00".to_string(),
            slot_minutes: 30,
            min_booking_minutes: 60,
            max_booking_minutes: 180,
            max_advance_days: 14,
            cancellation_hours: 24,
            allow_guest_booking: false,
        }
    }
}

impl BookingSettings {
    pub fn validate(&self) -> Result<(), String> {
        let open = parse_hhmm(&self.open_time)
            .ok_or_else(|| "Время открытия должно быть в формате ЧЧ:ММ".to_string())?;
        let close = parse_hhmm(&self.close_time)
            .ok_or_else(|| "Время закрытия должно быть в формате ЧЧ:ММ".to_string())?;
        if open >= close {
            return Err("Время открытия должно быть раньше времени закрытия".into());
        }
        if self.slot_minutes == 0 {
            return Err("Шаг слота должен быть больше нуля".into());
        }
        if self.min_booking_minutes == 0 || self.min_booking_minutes % self.slot_minutes != 0 {
            return Err("Минимальная длительность должна быть кратна шагу слота".into());
        }
        if self.max_booking_minutes < self.min_booking_minutes {
            return Err("Максимальная длительность меньше минимальной".into());
        }
        if self.max_booking_minutes > close - open {
            return Err("Максимальная длительность превышает время работы".into());
        }
        if self.max_advance_days == 0 {
            return Err("Горизонт бронирования должен быть не меньше 1 дня".into());
        }
        Ok(())
    }

    /// Количество слотов в рабочем дне
    pub fn slots_per_day(&self) -> u32 {
        match (parse_hhmm(&self.open_time), parse_hhmm(&self.close_time)) {
            (Some(open), Some(close)) if close > open && self.slot_minutes > 0 => {
                (close - open) / self.slot_minutes
            }
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_booking_settings_are_valid() {
        let s = BookingSettings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.slots_per_day(), 32);
    }

    #[test]
    fn test_booking_settings_rules() {
        let mut s = BookingSettings {
            open_time: "22:00".into(),
            close_time: "06:00".into(),
            ..Default::default()
        };
        assert!(s.validate().is_err());
        assert_eq!(s.slots_per_day(), 0);

        s = BookingSettings::default();
        s.min_booking_minutes = 45;
        assert!(s.validate().is_err());

        s = BookingSettings::default();
        s.max_booking_minutes = 30;
        assert!(s.validate().is_err());

        s = BookingSettings::default();
        s.slot_minutes = 0;
        assert!(s.validate().is_err());

        s = BookingSettings::default();
        s.open_time = "6am".into();
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_general_settings() {
        let mut g = GeneralSettings {
            site_name: "Sport Club".into(),
            contact_email: "info@club.vn".into(),
            ..Default::default()
        };
        assert!(g.validate().is_ok());
        g.currency = "DONG".into();
        assert!(g.validate().is_err());
    }
}
