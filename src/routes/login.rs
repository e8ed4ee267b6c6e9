//! Login route. Field edits and the submit decision go through `LoginForm`;
//! this component only wires DOM events to the controller and dispatches the
//! network call. On success the token pair is handed to the session context
//! and the user is sent home.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::form::{Field, LoginForm};
use crate::features::auth::state::use_session;
use crate::features::auth::types::LoginRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::new());

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            let tokens = form.try_update(|form| form.on_response(result)).flatten();
            if let Some(tokens) = tokens {
                session.set_tokens(tokens);
                navigate("/", Default::default());
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let request = form.with_untracked(LoginForm::on_submit);
        login_action.dispatch(request);
    };

    view! {
        <AppShell>
            <div class="min-h-[70vh] flex items-center justify-center px-6 py-10">
                <form class="w-full max-w-sm" on:submit=on_submit>
                    <div class="space-y-2">
                        <h1 class="text-2xl font-semibold text-stone-800">"Login"</h1>
                        <p class="text-sm text-stone-500">
                            "Hey, enter your details to get sign in to your account"
                        </p>
                    </div>

                    <div class="mt-6 space-y-4">
                        <div>
                            <label
                                class="block mb-2 text-sm font-medium text-stone-700"
                                for="input_username"
                            >
                                "Username"
                            </label>
                            <input
                                id="input_username"
                                name="username"
                                type="text"
                                class="w-full rounded-lg border border-stone-300 px-3.5 py-3 text-sm text-stone-800 placeholder-stone-400 focus:outline-none focus:border-amber-400"
                                autocomplete="off"
                                placeholder="Username"
                                required
                                on:input=move |event| {
                                    form.update(|form| {
                                        form.on_field_change(
                                            Field::Username,
                                            event_target_value(&event),
                                        );
                                    });
                                }
                            />
                        </div>
                        <div>
                            <label
                                class="block mb-2 text-sm font-medium text-stone-700"
                                for="input_password"
                            >
                                "Password"
                            </label>
                            <input
                                id="input_password"
                                name="password"
                                type="password"
                                class="w-full rounded-lg border border-stone-300 px-3.5 py-3 text-sm text-stone-800 placeholder-stone-400 focus:outline-none focus:border-amber-400"
                                autocomplete="off"
                                placeholder="Password"
                                required
                                minlength="8"
                                maxlength="20"
                                on:input=move |event| {
                                    form.update(|form| {
                                        form.on_field_change(
                                            Field::Password,
                                            event_target_value(&event),
                                        );
                                    });
                                }
                            />
                        </div>

                        <Button button_type="submit">"Login"</Button>
                        <A
                            href="/registration"
                            {..}
                            class="block w-full rounded-lg border-2 border-amber-400 py-2.5 text-center text-sm font-medium text-stone-700 hover:opacity-70"
                        >
                            "Registration"
                        </A>
                    </div>

                    {move || {
                        login_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || {
                        form.with(|form| {
                            form.state
                                .last_error
                                .clone()
                                .map(|message| (message, form.state.last_error_detail.clone()))
                        })
                            .map(|(message, detail)| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=message detail=detail />
                                    </div>
                                }
                            })
                    }}
                </form>
            </div>
        </AppShell>
    }
}
