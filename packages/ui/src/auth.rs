//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{AuthGate, PlatformStorage, Role, SessionStore, UserRecord};

use crate::client::use_config;

/// Authentication state for the application.
pub type AuthState = AuthGate<PlatformStorage>;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the session.
/// The persisted record is read once, when the provider mounts.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_config();
    let auth_state = use_signal(move || {
        let store = SessionStore::with_keys(PlatformStorage::new(), config.session);
        let gate = AuthGate::new(store);
        tracing::info!(
            authenticated = gate.is_authenticated(),
            role = gate.role().map(Role::as_str),
            "Session restored"
        );
        gate
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Record a successful login. A failure to persist is logged; the user stays
/// logged in until the page is closed.
pub fn sign_in(mut auth: Signal<AuthState>, user: UserRecord, role: Role) {
    tracing::info!(user_id = %user.id, %role, "Logged in");
    if let Err(e) = auth.write().login(user, role) {
        tracing::warn!("Session not persisted: {}", e);
    }
}

pub fn sign_out(mut auth: Signal<AuthState>) {
    tracing::info!("Logging out");
    auth.write().logout();
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| sign_out(auth),
            "{label}"
        }
    }
}
