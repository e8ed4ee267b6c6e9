//! Session state and context for the frontend. The login page delivers the
//! token pair here after a successful call; how the tokens are used is the
//! session layer's concern, not the form's. Tokens live in memory only and
//! are dropped on reload.

use crate::features::auth::types::Auth;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    pub tokens: RwSignal<Option<Auth>>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    /// Builds a context around the provided token signal.
    fn new(tokens: RwSignal<Option<Auth>>) -> Self {
        let is_authenticated = Signal::derive(move || tokens.get().is_some());
        Self {
            tokens,
            is_authenticated,
        }
    }

    /// Stores the token pair received from a successful login.
    pub fn set_tokens(&self, tokens: Auth) {
        self.tokens.set(Some(tokens));
    }
}

/// Provides the session context for the whole app.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let tokens = RwSignal::new(None);
    let session = SessionContext::new(tokens);
    provide_context(session);

    view! { {children()} }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let tokens = RwSignal::new(None);
        SessionContext::new(tokens)
    })
}
