use contracts::system::auth::UserInfo;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const USER_INFO_KEY: &str = "auth_user_info";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Сохраняет профиль пользователя, чтобы восстановить сессию после перезагрузки
pub fn save_user_info(user: &UserInfo) {
    if let (Some(storage), Ok(raw)) = (get_local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(USER_INFO_KEY, &raw);
    }
}

pub fn get_user_info() -> Option<UserInfo> {
    let raw = get_local_storage()?.get_item(USER_INFO_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Clear all authentication data
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_INFO_KEY);
    }
}
