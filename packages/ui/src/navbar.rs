use dioxus::prelude::*;

pub const VIEWS_CSS: Asset = asset!("/assets/views.css");

/// Page header: a title on the left, actions on the right.
#[component]
pub fn Navbar(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "navbar",
            h1 { class: "navbar-title", "{title}" }
            div {
                class: "navbar-actions",
                {children}
            }
        }
    }
}
