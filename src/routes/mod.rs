mod index;
mod login;
mod not_found;
mod registration;

pub(crate) use index::IndexPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use registration::RegistrationPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=IndexPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/registration") view=RegistrationPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
