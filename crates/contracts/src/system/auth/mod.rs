use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Логин обрезается по краям, пароль передаётся как есть
    pub fn new(username: &str, password: String) -> Self {
        Self {
            username: username.trim().to_string(),
            password,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err("Введите логин и пароль".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: UserRole,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn can_access_admin(&self) -> bool {
        self.role.can_access_admin()
    }

    /// Куда вести пользователя после входа
    pub fn landing_route(&self) -> &'static str {
        if self.can_access_admin() {
            "/admin"
        } else {
            "/my-bookings"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            username: "mai".into(),
            full_name: None,
            email: None,
            role,
        }
    }

    #[test]
    fn test_login_request_trims_username() {
        let req = LoginRequest::new("  mai ", " pw ".into());
        assert_eq!(req.username, "mai");
        assert_eq!(req.password, " pw ");
        assert!(req.validate().is_ok());
        assert!(LoginRequest::new("   ", "pw".into()).validate().is_err());
        assert!(LoginRequest::new("mai", String::new()).validate().is_err());
    }

    #[test]
    fn test_landing_route_by_role() {
        assert_eq!(user(UserRole::Admin).landing_route(), "/admin");
        assert_eq!(user(UserRole::Manager).landing_route(), "/admin");
        assert_eq!(user(UserRole::Customer).landing_route(), "/my-bookings");
    }
}
