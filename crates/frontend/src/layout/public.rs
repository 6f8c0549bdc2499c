//! Каркас публичных страниц (площадки, мои бронирования)

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    view! {
        <div class="public-layout">
            <header class="public-header">
                <A href="/" attr:class="public-header__brand">"Court Booking"</A>
                <nav class="public-header__nav">
                    <Show
                        when=move || auth_state.get().is_authenticated()
                        fallback=|| view! { <A href="/login">"Войти"</A> }
                    >
                        <A href="/my-bookings">{icon("bookings")}" Мои бронирования"</A>
                        <Show when=move || auth_state.get().can_access_admin()>
                            <A href="/admin">{icon("settings")}" Админка"</A>
                        </Show>
                        <span class="public-header__user">{move || auth_state.get().display_name()}</span>
                        <button class="button button--icon" title="Выход" on:click=move |_| do_logout(set_auth_state)>
                            {icon("logout")}
                        </button>
                    </Show>
                </nav>
            </header>
            <main class="public-main">{children()}</main>
        </div>
    }
}
