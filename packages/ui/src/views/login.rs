use dioxus::prelude::*;
use store::SessionError;

use crate::auth::{use_auth, use_session_store, AuthState};
use crate::validation::{Field, FieldErrors, LoginForm};

use super::input_class;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared sign-in form.
///
/// Validates locally, then checks the credentials against the session store.
#[component]
pub fn LoginView(
    /// Called after a successful sign-in — navigate to the search view.
    on_authenticated: EventHandler<()>,
    on_navigate_signup: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();
    let sessions = use_session_store();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let form = LoginForm {
            email: email(),
            password: password(),
        };
        let found = form.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        submitting.set(true);
        banner.set(None);

        match sessions.authenticate(&form.email, &form.password) {
            Ok(session) => {
                auth.set(AuthState {
                    session: Some(session),
                });
                submitting.set(false);
                on_authenticated.call(());
            }
            Err(e) => {
                if !matches!(e, SessionError::InvalidCredentials) {
                    tracing::error!("Sign-in failed: {e}");
                }
                banner.set(Some(e.to_string()));
                submitting.set(false);
            }
        }
    };

    let field_error = move |field: Field| errors.read().get(field).map(str::to_string);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-container",
            div {
                class: "auth-box",
                h1 { class: "auth-title", "Sign In" }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    if let Some(message) = banner() {
                        div { class: "error-banner", "{message}" }
                    }

                    div {
                        class: "form-group",
                        input {
                            class: input_class(field_error(Field::Email).is_some()),
                            r#type: "email",
                            name: "email",
                            placeholder: "Email",
                            value: email(),
                            oninput: move |evt: FormEvent| {
                                email.set(evt.value());
                                errors.write().clear(Field::Email);
                                banner.set(None);
                            },
                        }
                        if let Some(message) = field_error(Field::Email) {
                            span { class: "error-message", "{message}" }
                        }
                    }

                    div {
                        class: "form-group",
                        input {
                            class: input_class(field_error(Field::Password).is_some()),
                            r#type: "password",
                            name: "password",
                            placeholder: "Password",
                            value: password(),
                            oninput: move |evt: FormEvent| {
                                password.set(evt.value());
                                errors.write().clear(Field::Password);
                                banner.set(None);
                            },
                        }
                        if let Some(message) = field_error(Field::Password) {
                            span { class: "error-message", "{message}" }
                        }
                    }

                    button {
                        class: "auth-button",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing In..." } else { "Sign In" }
                    }
                }

                p {
                    class: "auth-link",
                    "Don't have an account? "
                    a {
                        onclick: move |_| on_navigate_signup.call(()),
                        "Sign Up"
                    }
                }
            }
        }
    }
}
