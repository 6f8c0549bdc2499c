//! TopHeader: верхняя панель админки: меню, название, пользователь, выход.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        do_logout(set_auth_state);
        navigate("/login", Default::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {icon("filter")}
                </button>
                <span class="top-header__title">"Court Booking · Админка"</span>
            </div>

            <div class="top-header__actions">
                <a class="top-header__link" href="/my-bookings">
                    {icon("bookings")}
                    <span>"Мои бронирования"</span>
                </a>

                <div class="top-header__user">
                    {icon("users")}
                    <span>{move || auth_state.get().display_name()}</span>
                    {move || auth_state.get().user_info.map(|u| view! {
                        <span class="top-header__role">{u.role.display_name()}</span>
                    })}
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Выход">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
