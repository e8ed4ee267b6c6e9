//! Alert banners for success and error messages. Messages must be safe to
//! render and should never include secrets or tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

/// Renders a styled alert banner with an optional secondary detail line.
#[component]
pub fn Alert(
    kind: AlertKind,
    message: String,
    #[prop(optional)] detail: Option<String>,
) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
        }
        AlertKind::Success => {
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700"
        }
        AlertKind::Info => {
            "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700"
        }
    };

    view! {
        <div class=class role="alert">
            <p class="font-medium">{message}</p>
            {detail.map(|detail| view! { <p class="opacity-80">{detail}</p> })}
        </div>
    }
}
