use crate::app_shell::AdminShell;
use crate::domain::a001_venue::ui::public::{VenueIndexPage, VenuePage};
use crate::domain::a006_booking::ui::my_bookings::MyBookingsPage;
use crate::layout::public::PublicLayout;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn PublicVenueIndex() -> impl IntoView {
    view! { <PublicLayout><VenueIndexPage /></PublicLayout> }
}

#[component]
fn PublicVenue() -> impl IntoView {
    view! { <PublicLayout><VenuePage /></PublicLayout> }
}

#[component]
fn PublicMyBookings() -> impl IntoView {
    view! {
        <PublicLayout>
            <RequireAuth>
                <MyBookingsPage />
            </RequireAuth>
        </PublicLayout>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PublicLayout>
            <div class="not-found">
                <h1>"404"</h1>
                <p>"Страница не найдена"</p>
                <A href="/">"На главную"</A>
            </div>
        </PublicLayout>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PublicVenueIndex />
                <Route path=path!("/venues/:id") view=PublicVenue />
                <Route path=path!("/my-bookings") view=PublicMyBookings />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/admin") view=AdminShell />
            </Routes>
        </Router>
    }
}
