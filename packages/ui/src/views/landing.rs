use dioxus::prelude::*;

use crate::navbar::VIEWS_CSS;

/// Public landing page.
#[component]
pub fn LandingPage(on_get_started: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "hero",
            h1 { "TutorHub" }
            p { "Tutors publish video, audio and reading lessons. Learners pick them up at their own pace." }
            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| on_get_started.call(()),
                "Get started"
            }
        }
    }
}
