use serde::{Deserialize, Serialize};

use crate::enums::UserRole;
use crate::shared::text::{contains_ci, contains_ci_opt, is_valid_email};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    pub last_login_at: Option<String>,
}

impl User {
    pub fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.username, query)
            || contains_ci_opt(self.full_name.as_deref(), query)
            || contains_ci_opt(self.email.as_deref(), query)
            || contains_ci_opt(self.phone.as_deref(), query)
    }

    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

fn validate_contacts(email: Option<&str>, phone: Option<&str>) -> Result<(), String> {
    if let Some(email) = email.filter(|e| !e.trim().is_empty()) {
        if !is_valid_email(email) {
            return Err("Некорректный email".into());
        }
    }
    if let Some(phone) = phone.filter(|p| !p.trim().is_empty()) {
        let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
        if !(9..=15).contains(&digits) {
            return Err("Телефон должен содержать от 9 до 15 цифр".into());
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), String> {
        let username = self.username.trim();
        if username.chars().count() < 3 {
            return Err("Логин должен содержать не менее 3 символов".into());
        }
        if username.contains(char::is_whitespace) {
            return Err("Логин не должен содержать пробелов".into());
        }
        if self.password.chars().count() < 6 {
            return Err("Пароль должен содержать не менее 6 символов".into());
        }
        validate_contacts(self.email.as_deref(), self.phone.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
}

impl UpdateUserDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_contacts(self.email.as_deref(), self.phone.as_deref())
    }
}

impl From<&User> for UpdateUserDto {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.clone(),
            email: u.email.clone(),
            full_name: u.full_name.clone(),
            phone: u.phone.clone(),
            role: u.role,
            is_active: u.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_validation() {
        let mut dto = CreateUserDto {
            username: "manager1".into(),
            password: "secret1".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.username = "ab".into();
        assert!(dto.validate().is_err());

        dto.username = "john doe".into();
        assert!(dto.validate().is_err());

        dto.username = "john".into();
        dto.password = "123".into();
        assert!(dto.validate().is_err());

        dto.password = "123456".into();
        dto.email = Some("bad-email".into());
        assert_eq!(dto.validate().unwrap_err(), "Некорректный email");

        dto.email = Some("".into());
        dto.phone = Some("+84 (90) 123-45-67".into());
        assert!(dto.validate().is_ok());
        dto.phone = Some("123".into());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_user_search_and_display_name() {
        let user = User {
            username: "ivan".into(),
            full_name: Some("Иван Петров".into()),
            email: Some("ivan@club.ru".into()),
            ..Default::default()
        };
        assert!(user.matches_query("петров"));
        assert!(user.matches_query("CLUB.RU"));
        assert!(!user.matches_query("sidorov"));
        assert_eq!(user.display_name(), "Иван Петров");

        let bare = User {
            username: "guest".into(),
            full_name: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(bare.display_name(), "guest");
    }
}
