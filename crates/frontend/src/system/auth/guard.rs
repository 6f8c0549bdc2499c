use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;
use crate::shared::config::config;

/// Component that requires authentication
/// Redirects to login if there is no token
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path=config().login_route /> }
        >
            {children()}
        </Show>
    }
}

/// Component that requires admin or manager role
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <RequireAuth>
            <Show
                when=move || auth_state.get().can_access_admin()
                fallback=|| view! {
                    <div class="access-denied">
                        <h2>"Доступ запрещён"</h2>
                        <p>"Раздел администрирования доступен только администраторам и менеджерам."</p>
                        <a href="/my-bookings">"К моим бронированиям"</a>
                    </div>
                }
            >
                {children()}
            </Show>
        </RequireAuth>
    }
}
