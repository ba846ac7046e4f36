use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::navbar::Navbar;

/// Learner home. Lesson browsing lives on the server side for now.
#[component]
pub fn StudentPage() -> Element {
    let auth = use_auth();
    let name = auth
        .read()
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "Learner".to_string());

    rsx! {
        div {
            class: "page",
            div {
                class: "page-inner",
                Navbar {
                    title: "Learner Dashboard",
                    LogoutButton { class: "logout-btn" }
                }
                div {
                    class: "card",
                    h2 { "Welcome, {name}!" }
                    p { "Your learning content will appear here." }
                }
            }
        }
    }
}
