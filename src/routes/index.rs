//! Landing page. Intentionally minimal; it exists to anchor the router and
//! point visitors at the login flow.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-start gap-y-4 py-10">
                <h1 class="text-3xl font-semibold text-stone-800">"JokeHub"</h1>
                <A href="/login" {..} class="text-sm text-blue-600 hover:underline">
                    "Login"
                </A>
            </div>
        </AppShell>
    }
}
