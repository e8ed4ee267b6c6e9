//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup so routes can focus on content.

use crate::app_lib::build_info;
use crate::features::auth::state::use_session;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-stone-200">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <span class="font-semibold whitespace-nowrap text-stone-800 select-none">
                            "JokeHub"
                        </span>
                    </A>
                    <nav class="font-medium text-sm">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <A
                                        href="/login"
                                        {..}
                                        class="block py-2 px-3 text-stone-800 rounded hover:text-amber-600"
                                    >
                                        "Login"
                                    </A>
                                }
                            }
                        >
                            <span class="block py-2 px-3 text-stone-400">"Signed in"</span>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="flex-1 max-w-screen-xl w-full mx-auto px-4">{children()}</main>
            <footer class="max-w-screen-xl w-full mx-auto px-4 py-3 text-xs text-stone-400">
                {format!(
                    "jokehub-web {} ({})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::git_commit_hash(),
                )}
            </footer>
        </div>
    }
}
