use contracts::system::auth::{LoginRequest, UserInfo};
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api::ApiError;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    /// Сессия из localStorage: токен и сохранённый профиль
    fn restore() -> Self {
        match (storage::get_access_token(), storage::get_user_info()) {
            (Some(token), Some(user)) => Self {
                access_token: Some(token),
                user_info: Some(user),
            },
            (Some(_), None) => {
                // профиль потерян, токен без него бесполезен
                storage::clear_tokens();
                Self::default()
            }
            _ => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn can_access_admin(&self) -> bool {
        self.user_info
            .as_ref()
            .map(|u| u.can_access_admin())
            .unwrap_or(false)
    }

    pub fn display_name(&self) -> String {
        self.user_info
            .as_ref()
            .map(|u| {
                u.full_name
                    .clone()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| u.username.clone())
            })
            .unwrap_or_default()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::restore());

    if let Some(user) = auth_state.get_untracked().user_info {
        log::info!("session restored for {}", user.username);
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Вход: сохраняет токен и профиль, возвращает профиль вошедшего
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    request: LoginRequest,
) -> Result<UserInfo, ApiError> {
    let response = api::login(&request).await?;

    storage::save_access_token(&response.access_token);
    storage::save_user_info(&response.user);
    log::info!("logged in as {}", response.user.username);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user.clone()),
    });

    Ok(response.user)
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
