use dioxus::prelude::*;
use store::SessionError;

use crate::auth::{use_auth, use_session_store, AuthState};
use crate::validation::{Field, FieldErrors, SignupForm};

use super::input_class;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared registration form. A new account is signed in right away.
#[component]
pub fn SignupView(
    /// Called after the account is created — navigate to the search view.
    on_registered: EventHandler<()>,
    on_navigate_login: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();
    let sessions = use_session_store();
    let mut form = use_signal(SignupForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let current = form();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        submitting.set(true);
        banner.set(None);

        match sessions.register(&current.name, &current.email, &current.password) {
            Ok(session) => {
                auth.set(AuthState {
                    session: Some(session),
                });
                submitting.set(false);
                on_registered.call(());
            }
            Err(SessionError::DuplicateEmail) => {
                let mut found = FieldErrors::default();
                found.insert(Field::Email, SessionError::DuplicateEmail.to_string());
                errors.set(found);
                submitting.set(false);
            }
            Err(e) => {
                tracing::error!("Registration failed: {e}");
                banner.set(Some(e.to_string()));
                submitting.set(false);
            }
        }
    };

    let field_error = move |field: Field| errors.read().get(field).map(str::to_string);

    let mut edit = move |field: Field, value: String| {
        {
            let mut form = form.write();
            match field {
                Field::Name => form.name = value,
                Field::Email => form.email = value,
                Field::Password => form.password = value,
                Field::ConfirmPassword => form.confirm_password = value,
            }
        }
        errors.write().clear(field);
    };

    let fields = [
        (Field::Name, "text", "name", "Name"),
        (Field::Email, "email", "email", "Email"),
        (Field::Password, "password", "password", "Password"),
        (Field::ConfirmPassword, "password", "confirmPassword", "Confirm Password"),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-container",
            div {
                class: "auth-box",
                h1 { class: "auth-title", "Sign Up" }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    if let Some(message) = banner() {
                        div { class: "error-banner", "{message}" }
                    }

                    for (field, kind, name, placeholder) in fields {
                        div {
                            key: "{name}",
                            class: "form-group",
                            input {
                                class: input_class(field_error(field).is_some()),
                                r#type: kind,
                                name: name,
                                placeholder: placeholder,
                                value: field_value(&form.read(), field),
                                oninput: move |evt: FormEvent| edit(field, evt.value()),
                            }
                            if let Some(message) = field_error(field) {
                                span { class: "error-message", "{message}" }
                            }
                        }
                    }

                    button {
                        class: "auth-button",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing Up..." } else { "Sign Up" }
                    }
                }

                p {
                    class: "auth-link",
                    "Already have an account? "
                    a {
                        onclick: move |_| on_navigate_login.call(()),
                        "Sign In"
                    }
                }
            }
        }
    }
}

fn field_value(form: &SignupForm, field: Field) -> String {
    match field {
        Field::Name => form.name.clone(),
        Field::Email => form.email.clone(),
        Field::Password => form.password.clone(),
        Field::ConfirmPassword => form.confirm_password.clone(),
    }
}
