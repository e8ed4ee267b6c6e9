//! Registration route. All behavior lives in `RegistrationForm`: the
//! password-match gate on submit, the prior-value gate on strength probes,
//! and the asymmetric response handling. This component dispatches whatever
//! the controller hands back and feeds action results into it.
//!
//! The submit and strength requests are independent; their responses touch
//! disjoint state slices, so no ordering is enforced between them.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::form::{Field, RegistrationForm};
use crate::features::auth::types::RegistrationRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::new());
    let (success, set_success) = signal(false);

    let register_action = Action::new_local(move |request: &RegistrationRequest| {
        let request = request.clone();
        async move { client::register(&request).await }
    });

    let strength_action = Action::new_local(move |request: &RegistrationRequest| {
        let request = request.clone();
        async move { client::password_strength(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            let created = result.is_ok();
            form.update(|form| form.on_submit_response(result));
            set_success.set(created);
        }
    });

    Effect::new(move |_| {
        if let Some(result) = strength_action.value().get() {
            form.update(|form| form.on_strength_response(result));
        }
    });

    let on_password_input = move |value: String| {
        let probe = form
            .try_update(|form| form.on_field_change(Field::Password, value))
            .flatten();
        if let Some(request) = probe {
            strength_action.dispatch(request);
        }
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_success.set(false);
        let request = form.try_update(RegistrationForm::on_submit).flatten();
        if let Some(request) = request {
            register_action.dispatch(request);
        }
    };

    let form_disabled = Signal::derive(move || form.with(|form| form.state.form_disabled));

    view! {
        <AppShell>
            <div class="min-h-[70vh] flex items-center justify-center px-6 py-10">
                <form class="w-full max-w-sm" on:submit=on_submit>
                    <div class="space-y-2">
                        <h1 class="text-2xl font-semibold text-stone-800">
                            "Create an account"
                        </h1>
                        <p class="text-sm text-stone-500">
                            "Enter your details to proceed further"
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
                                disabled=move || form_disabled.get()
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
                                disabled=move || form_disabled.get()
                                on:input=move |event| {
                                    on_password_input(event_target_value(&event));
                                }
                            />
                            {move || {
                                form.with(|form| form.hack_time().map(str::to_string))
                                    .map(|estimate| {
                                        view! {
                                            <p class="mt-1 text-xs text-stone-400">
                                                {format!("Crack time at 10 guesses/sec: {estimate}")}
                                            </p>
                                        }
                                    })
                            }}
                        </div>
                        <div>
                            <label
                                class="block mb-2 text-sm font-medium text-stone-700"
                                for="input_repeat_password"
                            >
                                "Repeat password"
                            </label>
                            <input
                                id="input_repeat_password"
                                name="repeat_password"
                                type="password"
                                class="w-full rounded-lg border border-stone-300 px-3.5 py-3 text-sm text-stone-800 placeholder-stone-400 focus:outline-none focus:border-amber-400"
                                autocomplete="off"
                                placeholder="Repeat password"
                                required
                                minlength="8"
                                maxlength="20"
                                disabled=move || form_disabled.get()
                                on:input=move |event| {
                                    form.update(|form| {
                                        form.on_field_change(
                                            Field::RepeatPassword,
                                            event_target_value(&event),
                                        );
                                    });
                                }
                            />
                        </div>

                        <Button button_type="submit" disabled=form_disabled>
                            "Create"
                        </Button>
                    </div>

                    {move || {
                        register_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || {
                        success
                            .get()
                            .then_some(view! {
                                <div class="mt-4">
                                    <Alert
                                        kind=AlertKind::Success
                                        message="Account created. You can now log in."
                                            .to_string()
                                    />
                                </div>
                            })
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
