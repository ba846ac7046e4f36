use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::icons::FaUpload;
use crate::navbar::Navbar;
use crate::Icon;

/// Tutor home with the entry point to the upload form.
#[component]
pub fn TutorDashboard(on_upload: EventHandler<()>) -> Element {
    let auth = use_auth();
    let name = auth
        .read()
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "Tutor".to_string());

    rsx! {
        div {
            class: "page",
            div {
                class: "page-inner",
                Navbar {
                    title: "Tutor Dashboard",
                    LogoutButton { class: "logout-btn" }
                }
                div {
                    class: "card",
                    h2 { "Welcome, {name}!" }
                    p { "Share a new lesson with your learners." }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_upload.call(()),
                        Icon { icon: FaUpload, width: 14, height: 14 }
                        "Upload new lesson"
                    }
                }
            }
        }
    }
}
