//! Общие контракты фронтенда и бэкенда бронирования кортов:
//! DTO, перечисления и бизнес-правила, не зависящие от окружения (WASM/native).

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
