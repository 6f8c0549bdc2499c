//! Настройки клиента.
//!
//! Значения по умолчанию можно переопределить на этапе сборки переменными окружения:
//! - `BOOKING_API_BASE`: полный адрес бэкенда, например `https://api.club.vn`
//! - `BOOKING_UPLOADS_PATH`: путь к загруженным файлам на бэкенде
//! - `BOOKING_CURRENCY`: валюта цен на публичных страницах (ISO-код)

#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// Явный адрес API; если не задан, берётся `{protocol}//{hostname}:{api_port}`
    pub api_base_override: Option<&'static str>,
    pub api_port: u16,
    pub uploads_path: &'static str,
    /// Картинка-заглушка для пустых изображений
    pub image_placeholder: &'static str,
    /// Валюта для публичных страниц, где настройки сайта недоступны
    pub currency: &'static str,
    pub toast_timeout_ms: u32,
    pub default_page_size: usize,
    pub page_size_options: &'static [usize],
    /// Маршрут, на который уводит ответ 401
    pub login_route: &'static str,
}

pub const CONFIG: AppConfig = AppConfig {
    api_base_override: option_env!("BOOKING_API_BASE"),
    api_port: 3000,
    uploads_path: match option_env!("BOOKING_UPLOADS_PATH") {
        Some(path) => path,
        None => "/uploads",
    },
    image_placeholder: "/assets/placeholder-court.svg",
    currency: match option_env!("BOOKING_CURRENCY") {
        Some(code) => code,
        None => "VND",
    },
    toast_timeout_ms: 4000,
    default_page_size: 25,
    page_size_options: &[10, 25, 50, 100],
    login_route: "/login",
};

pub fn config() -> &'static AppConfig {
    &CONFIG
}
