use serde::{Deserialize, Serialize};

/// Роль пользователя системы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    Customer,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Customer => "customer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Админ",
            UserRole::Manager => "Менеджер",
            UserRole::Customer => "Клиент",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            UserRole::Admin => "warning",
            UserRole::Manager => "primary",
            UserRole::Customer => "neutral",
        }
    }

    /// Доступ к панели администратора
    pub fn can_access_admin(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Manager)
    }

    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Admin, UserRole::Manager, UserRole::Customer]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_uses_snake_case() {
        let json = serde_json::to_string(&UserRole::Manager).unwrap();
        assert_eq!(json, "\"manager\"");
        let back: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(back, UserRole::Admin);
    }

    #[test]
    fn test_admin_access() {
        assert!(UserRole::Admin.can_access_admin());
        assert!(UserRole::Manager.can_access_admin());
        assert!(!UserRole::Customer.can_access_admin());
    }
}
