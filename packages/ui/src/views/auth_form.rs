//! Sign-in / sign-up form.

use api::Registration;
use dioxus::prelude::*;
use store::Role;

use crate::auth::{sign_in, use_auth};
use crate::client::use_api_client;
use crate::navbar::VIEWS_CSS;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    SignIn,
    SignUp,
}

/// Login page component. On success the session is stored and the router
/// moves on to the role's dashboard.
#[component]
pub fn AuthForm() -> Element {
    let auth = use_auth();
    let client = use_api_client();
    let mut mode = use_signal(|| Mode::SignIn);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Learner);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }
            if mode() == Mode::SignUp && n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }

            loading.set(true);
            let result = match mode() {
                Mode::SignIn => client.login(&e, &p).await,
                Mode::SignUp => {
                    let registration = Registration {
                        name: n,
                        email: e,
                        password: p,
                        user_type: role(),
                    };
                    client.register(&registration).await
                }
            };
            loading.set(false);

            match result {
                Ok((user, role)) => sign_in(auth, user, role),
                Err(e) => {
                    tracing::error!("Authentication failed: {}", e);
                    error.set(Some(e.detail()));
                }
            }
        }
    };

    let (heading, submit_label, switch_prompt, switch_label) = match mode() {
        Mode::SignIn => ("Sign in", "Sign in", "New to TutorHub? ", "Create an account"),
        Mode::SignUp => ("Create account", "Sign up", "Already have an account? ", "Sign in"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "hero",

            h1 { "{heading}" }
            p { "Tutors upload lessons, learners follow them." }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                if mode() == Mode::SignUp {
                    input {
                        r#type: "text",
                        placeholder: "Name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                if mode() == Mode::SignUp {
                    select {
                        value: role().as_str(),
                        onchange: move |evt: FormEvent| {
                            if let Ok(r) = evt.value().parse::<Role>() {
                                role.set(r);
                            }
                        },
                        for r in Role::ALL {
                            option { key: "{r}", value: r.as_str(), "I am a {r}" }
                        }
                    }
                }

                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Please wait..." } else { "{submit_label}" }
                }
            }

            p {
                class: "auth-switch",
                "{switch_prompt}"
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| {
                        error.set(None);
                        mode.set(if mode() == Mode::SignIn { Mode::SignUp } else { Mode::SignIn });
                    },
                    "{switch_label}"
                }
            }
        }
    }
}
