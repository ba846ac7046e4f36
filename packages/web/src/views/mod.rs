//! Route components. Each one hands its path to [`Screen`], which applies the
//! access rules before anything is drawn.

use dioxus::prelude::*;
use dioxus::router::Navigator;
use ui::views::{AuthForm, LandingPage, StudentPage, UploadPage};
use ui::{resolve, use_auth, Page, Resolution};

use crate::Route;

#[component]
pub fn Root() -> Element {
    rsx! { Screen { path: Page::Landing.path().to_string() } }
}

#[component]
pub fn Login() -> Element {
    rsx! { Screen { path: Page::Login.path().to_string() } }
}

#[component]
pub fn TutorDashboard() -> Element {
    rsx! { Screen { path: Page::TutorDashboard.path().to_string() } }
}

#[component]
pub fn LearnerDashboard() -> Element {
    rsx! { Screen { path: Page::LearnerDashboard.path().to_string() } }
}

#[component]
pub fn Upload() -> Element {
    rsx! { Screen { path: Page::Upload.path().to_string() } }
}

#[component]
pub fn Fallback(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { Screen { path } }
}

/// Render the page for `path` or replace the history entry with the page the
/// current session is allowed to see. Re-runs whenever the session changes.
#[component]
fn Screen(path: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let access = auth.read().access();

    match resolve(&path, access) {
        Resolution::Render(page) => render(page, nav),
        Resolution::Redirect(page) => {
            tracing::debug!(from = %path, to = page.path(), "Redirecting");
            nav.replace(Route::for_page(page));
            rsx! {}
        }
    }
}

fn render(page: Page, nav: Navigator) -> Element {
    let go = move |page: Page| {
        nav.push(Route::for_page(page));
    };

    match page {
        Page::Landing => rsx! {
            LandingPage { on_get_started: move |_| go(Page::Login) }
        },
        Page::Login => rsx! { AuthForm {} },
        Page::TutorDashboard => rsx! {
            ui::views::TutorDashboard { on_upload: move |_| go(Page::Upload) }
        },
        Page::LearnerDashboard => rsx! { StudentPage {} },
        Page::Upload => rsx! {
            UploadPage { on_back: move |_| go(Page::TutorDashboard) }
        },
    }
}
