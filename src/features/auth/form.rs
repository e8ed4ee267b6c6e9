//! Form state machines for the login and registration pages. Each form mount
//! owns one `FormFields` and one `SubmissionState`; both are dropped with
//! the page. The controllers are synchronous: they decide which request to
//! send and apply the response once the route's action resolves, so the
//! whole submit lifecycle is testable without a browser.
//!
//! Error handling is deliberately asymmetric. Login and registration
//! failures surface the server message through `last_error`; strength-probe
//! failures are logged and swallowed. The two paths must not be unified.

use super::types::{Auth, LoginRequest, RegistrationRequest, Strength};
use crate::app_lib::AppError;
use leptos::logging::error;

/// Message shown when a failure carries no structured server body.
const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Names the input backing a field-change event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    RepeatPassword,
}

/// Current field values of a single form instance. Pure storage: length and
/// presence constraints live on the form elements, not here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub username: Option<String>,
    pub password: Option<String>,
    pub repeat_password: Option<String>,
}

impl FormFields {
    /// Replaces exactly one named field, leaving the others untouched.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = Some(value),
            Field::Password => self.password = Some(value),
            Field::RepeatPassword => self.repeat_password = Some(value),
        }
    }

    fn password_present(&self) -> bool {
        self.password
            .as_deref()
            .is_some_and(|value| !value.is_empty())
    }
}

/// Transient submission state owned by a controller for one mount.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    /// True while a submit request is in flight; mirrored onto the button.
    pub form_disabled: bool,
    pub last_error: Option<String>,
    /// First `details` entry of the failed response, shown under the error.
    pub last_error_detail: Option<String>,
    /// Latest crack-time estimate; read through `RegistrationForm::hack_time`.
    pub hack_time: Option<String>,
}

impl SubmissionState {
    fn clear_error(&mut self) {
        self.last_error = None;
        self.last_error_detail = None;
    }

    fn set_error(&mut self, err: &AppError) {
        let (message, detail) = error_parts(err);
        self.last_error = Some(message);
        self.last_error_detail = detail;
    }
}

/// Controller for the login form. Login never probes password strength and
/// never disables the form.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub fields: FormFields,
    pub state: SubmissionState,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_field_change(&mut self, field: Field, value: String) {
        self.fields.set_field(field, value);
    }

    /// Builds the login body from the current field values.
    pub fn on_submit(&self) -> LoginRequest {
        LoginRequest {
            username: self.fields.username.clone(),
            password: self.fields.password.clone(),
        }
    }

    /// Applies the login response. On success the token pair is returned so
    /// the caller can hand it to the session context; the form itself never
    /// stores tokens.
    pub fn on_response(&mut self, result: Result<Auth, AppError>) -> Option<Auth> {
        match result {
            Ok(auth) => {
                self.state.clear_error();
                Some(auth)
            }
            Err(err) => {
                self.state.set_error(&err);
                None
            }
        }
    }
}

/// Controller for the registration form.
#[derive(Clone, Debug, Default)]
pub struct RegistrationForm {
    pub fields: FormFields,
    pub state: SubmissionState,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates one field. Returns a strength probe to dispatch when the
    /// password was edited and its value *before* this edit was non-empty:
    /// the first keystroke into an empty password field never probes, the
    /// second and later ones do, using the post-edit snapshot. Keying the
    /// trigger on the prior value drops the initial keystroke without a
    /// timer; do not rewrite this as a check on the new value.
    pub fn on_field_change(&mut self, field: Field, value: String) -> Option<RegistrationRequest> {
        let probe = field == Field::Password && self.fields.password_present();
        self.fields.set_field(field, value);
        probe.then(|| self.request_body())
    }

    /// Checks the local password match and arms the submit. Returns the body
    /// to send, or `None` when the passwords differ: the submit is silently
    /// dropped with the state untouched. Known usability gap, kept as-is
    /// pending product sign-off.
    pub fn on_submit(&mut self) -> Option<RegistrationRequest> {
        if self.fields.password != self.fields.repeat_password {
            return None;
        }
        self.state.form_disabled = true;
        Some(self.request_body())
    }

    /// Applies the registration response and re-enables the form either way.
    pub fn on_submit_response(&mut self, result: Result<(), AppError>) {
        self.state.form_disabled = false;
        match result {
            Ok(()) => self.state.clear_error(),
            Err(err) => self.state.set_error(&err),
        }
    }

    /// Applies a strength response. Failures are logged and swallowed: the
    /// estimate is a hint, not part of the submit path, so it must never
    /// populate `last_error`.
    pub fn on_strength_response(&mut self, result: Result<Strength, AppError>) {
        match result {
            Ok(strength) => self.state.hack_time = Some(strength.throttling_10_second),
            Err(err) => error!("password strength check failed: {err}"),
        }
    }

    /// Crack-time estimate for display. Returns `None` while the password
    /// field is empty, when any stored estimate is stale by definition. An
    /// estimate computed for an older password may still show until the next
    /// probe answers; that staleness window is accepted.
    pub fn hack_time(&self) -> Option<&str> {
        if self.fields.password_present() {
            self.state.hack_time.as_deref()
        } else {
            None
        }
    }

    fn request_body(&self) -> RegistrationRequest {
        RegistrationRequest {
            username: self.fields.username.clone(),
            password: self.fields.password.clone(),
            repeat_password: self.fields.repeat_password.clone(),
        }
    }
}

/// Maps a failed login or registration call to the message and optional
/// detail line surfaced in the form, preferring the server-supplied ones.
fn error_parts(err: &AppError) -> (String, Option<String>) {
    match err {
        AppError::Api(hub) if !hub.error.is_empty() => {
            (hub.error.clone(), hub.details.first().cloned())
        }
        _ => (GENERIC_ERROR.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::HubError;

    fn strength(ten_second: &str) -> Strength {
        Strength {
            throttling_100_hour: "centuries".to_string(),
            throttling_10_second: ten_second.to_string(),
            throttling_10k_second: "2 months".to_string(),
            throttling_10b_second: "less than a second".to_string(),
        }
    }

    fn invalid_credentials() -> AppError {
        AppError::Api(HubError {
            error: "invalid credentials".to_string(),
            details: vec!["username or password is incorrect".to_string()],
        })
    }

    #[test]
    fn set_field_updates_exactly_one_field() {
        let mut fields = FormFields::default();
        fields.set_field(Field::Username, "ann".to_string());
        assert_eq!(fields.username.as_deref(), Some("ann"));
        assert_eq!(fields.password, None);
        assert_eq!(fields.repeat_password, None);

        fields.set_field(Field::Password, "abc123XY".to_string());
        assert_eq!(fields.username.as_deref(), Some("ann"));
        assert_eq!(fields.password.as_deref(), Some("abc123XY"));
        assert_eq!(fields.repeat_password, None);

        fields.set_field(Field::RepeatPassword, "abc123XY".to_string());
        assert_eq!(fields.username.as_deref(), Some("ann"));
        assert_eq!(fields.password.as_deref(), Some("abc123XY"));
        assert_eq!(fields.repeat_password.as_deref(), Some("abc123XY"));

        fields.set_field(Field::Username, "bob".to_string());
        assert_eq!(fields.username.as_deref(), Some("bob"));
        assert_eq!(fields.password.as_deref(), Some("abc123XY"));
        assert_eq!(fields.repeat_password.as_deref(), Some("abc123XY"));
    }

    #[test]
    fn login_submit_snapshots_current_fields() {
        let mut form = LoginForm::new();
        form.on_field_change(Field::Username, "ann".to_string());
        form.on_field_change(Field::Password, "abc123XY".to_string());

        assert_eq!(
            form.on_submit(),
            LoginRequest {
                username: Some("ann".to_string()),
                password: Some("abc123XY".to_string()),
            }
        );
    }

    #[test]
    fn login_success_clears_error_and_yields_tokens() {
        let mut form = LoginForm::new();
        form.state.last_error = Some("stale".to_string());
        form.state.last_error_detail = Some("stale detail".to_string());

        let tokens = form.on_response(Ok(Auth {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
        }));

        assert_eq!(form.state.last_error, None);
        assert_eq!(form.state.last_error_detail, None);
        assert_eq!(tokens.map(|auth| auth.access_token), Some("at".to_string()));
    }

    #[test]
    fn login_failure_surfaces_server_message_and_first_detail() {
        let mut form = LoginForm::new();
        let tokens = form.on_response(Err(invalid_credentials()));

        assert_eq!(tokens, None);
        assert_eq!(form.state.last_error.as_deref(), Some("invalid credentials"));
        assert_eq!(
            form.state.last_error_detail.as_deref(),
            Some("username or password is incorrect")
        );
    }

    #[test]
    fn login_failure_without_body_falls_back_to_generic_message() {
        let mut form = LoginForm::new();
        form.on_response(Err(AppError::Network("connection refused".to_string())));

        assert_eq!(form.state.last_error.as_deref(), Some(GENERIC_ERROR));
        assert_eq!(form.state.last_error_detail, None);
    }

    #[test]
    fn structured_error_without_details_has_no_detail_line() {
        let mut form = LoginForm::new();
        form.on_response(Err(AppError::Api(HubError {
            error: "bad request".to_string(),
            details: vec![],
        })));

        assert_eq!(form.state.last_error.as_deref(), Some("bad request"));
        assert_eq!(form.state.last_error_detail, None);
    }

    #[test]
    fn registration_submit_is_noop_on_password_mismatch() {
        let cases = [
            (Some("abc123XY"), Some("abc123XZ")),
            (Some("abc123XY"), None),
            (None, Some("abc123XY")),
            (None, Some("")),
            (Some(""), None),
        ];

        for (password, repeat) in cases {
            let mut form = RegistrationForm::new();
            form.fields.username = Some("ann".to_string());
            form.fields.password = password.map(str::to_string);
            form.fields.repeat_password = repeat.map(str::to_string);
            let before = form.clone();

            assert_eq!(form.on_submit(), None, "case {password:?} / {repeat:?}");
            assert_eq!(form.fields, before.fields);
            assert_eq!(form.state, before.state);
        }
    }

    #[test]
    fn registration_submit_proceeds_when_passwords_match() {
        let mut form = RegistrationForm::new();
        form.on_field_change(Field::Username, "ann".to_string());
        form.on_field_change(Field::Password, "abc123XY".to_string());
        form.on_field_change(Field::RepeatPassword, "abc123XY".to_string());

        let body = form.on_submit();
        assert!(form.state.form_disabled);
        assert_eq!(
            body,
            Some(RegistrationRequest {
                username: Some("ann".to_string()),
                password: Some("abc123XY".to_string()),
                repeat_password: Some("abc123XY".to_string()),
            })
        );
    }

    #[test]
    fn registration_submit_proceeds_when_both_passwords_absent() {
        // None == None: the browser's `required` attribute normally blocks
        // this, but the controller itself lets it through.
        let mut form = RegistrationForm::new();
        assert!(form.on_submit().is_some());
        assert!(form.state.form_disabled);
    }

    #[test]
    fn submit_lifecycle_reenables_form_on_success_and_failure() {
        let mut form = RegistrationForm::new();
        form.fields.password = Some("abc123XY".to_string());
        form.fields.repeat_password = Some("abc123XY".to_string());

        assert!(form.on_submit().is_some());
        assert!(form.state.form_disabled);
        form.on_submit_response(Ok(()));
        assert!(!form.state.form_disabled);
        assert_eq!(form.state.last_error, None);

        assert!(form.on_submit().is_some());
        assert!(form.state.form_disabled);
        form.on_submit_response(Err(invalid_credentials()));
        assert!(!form.state.form_disabled);
        assert_eq!(form.state.last_error.as_deref(), Some("invalid credentials"));
        assert_eq!(
            form.state.last_error_detail.as_deref(),
            Some("username or password is incorrect")
        );

        assert!(form.on_submit().is_some());
        form.on_submit_response(Ok(()));
        assert_eq!(form.state.last_error, None);
        assert_eq!(form.state.last_error_detail, None);
    }

    #[test]
    fn first_keystroke_never_probes_second_does() {
        let mut form = RegistrationForm::new();

        // Password was absent before the first keystroke.
        assert_eq!(form.on_field_change(Field::Password, "a".to_string()), None);

        // Prior value "a" is non-empty: probe with the post-edit snapshot.
        let probe = form.on_field_change(Field::Password, "ab".to_string());
        assert_eq!(
            probe.and_then(|body| body.password),
            Some("ab".to_string())
        );
    }

    #[test]
    fn prior_empty_string_does_not_probe() {
        let mut form = RegistrationForm::new();
        form.fields.password = Some(String::new());

        assert_eq!(form.on_field_change(Field::Password, "a".to_string()), None);
    }

    #[test]
    fn clearing_a_nonempty_password_still_probes() {
        // The gate looks at the prior value only, so deleting the last
        // character fires one probe carrying an empty password.
        let mut form = RegistrationForm::new();
        form.fields.password = Some("a".to_string());

        let probe = form.on_field_change(Field::Password, String::new());
        assert_eq!(probe.and_then(|body| body.password), Some(String::new()));
    }

    #[test]
    fn non_password_edits_never_probe() {
        let mut form = RegistrationForm::new();
        form.fields.password = Some("abc123XY".to_string());

        assert_eq!(form.on_field_change(Field::Username, "ann".to_string()), None);
        assert_eq!(
            form.on_field_change(Field::RepeatPassword, "abc123XY".to_string()),
            None
        );
    }

    #[test]
    fn strength_success_stores_ten_second_estimate() {
        let mut form = RegistrationForm::new();
        form.fields.password = Some("abc123XY".to_string());

        form.on_strength_response(Ok(strength("3 years")));
        assert_eq!(form.hack_time(), Some("3 years"));
    }

    #[test]
    fn strength_failure_is_silent() {
        let mut form = RegistrationForm::new();
        form.fields.password = Some("abc123XY".to_string());
        form.state.hack_time = Some("3 years".to_string());

        form.on_strength_response(Err(AppError::Network("connection refused".to_string())));

        assert_eq!(form.hack_time(), Some("3 years"));
        assert_eq!(form.state.last_error, None);
    }

    #[test]
    fn hack_time_is_hidden_while_password_is_empty() {
        let mut form = RegistrationForm::new();
        form.fields.password = Some("abc123XY".to_string());
        form.on_strength_response(Ok(strength("3 years")));

        form.on_field_change(Field::Password, String::new());
        assert_eq!(form.hack_time(), None);

        // A late probe response still lands in the store and shows again
        // once the password is non-empty.
        form.on_field_change(Field::Password, "x".to_string());
        assert_eq!(form.hack_time(), Some("3 years"));
    }
}
