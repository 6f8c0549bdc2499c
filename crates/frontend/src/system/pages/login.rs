use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::api::ApiError;
use crate::system::auth::context::{do_login, use_auth};

fn login_error_text(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Неверный логин или пароль".to_string(),
        other => other.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    // Вошедшего пользователя отправляем по его роли
    Effect::new(move |_| {
        if let Some(user) = auth_state.get().user_info {
            navigate(user.landing_route(), Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let request = LoginRequest::new(&username.get_untracked(), password.get_untracked());
        if let Err(msg) = request.validate() {
            error.set(Some(msg));
            return;
        }

        busy.set(true);
        error.set(None);
        spawn_local(async move {
            let result = do_login(set_auth_state, request).await;
            busy.set(false);
            match result {
                // переход выполнит эффект выше
                Ok(_) => {}
                Err(e) => {
                    password.set(String::new());
                    error.set(Some(login_error_text(&e)));
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Court Booking"</h1>
                <h2>"Вход в систему"</h2>

                {move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Логин"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Пароль"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Вход..." } else { "Войти" }}
                    </button>
                </form>

                <a class="login-box__back" href="/">"← К площадкам"</a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_text() {
        assert_eq!(login_error_text(&ApiError::Unauthorized), "Неверный логин или пароль");
        assert_eq!(
            login_error_text(&ApiError::Validation("Аккаунт заблокирован".into())),
            "Аккаунт заблокирован"
        );
    }
}
