use dioxus::prelude::*;

use store::ClientConfig;
use ui::{AuthProvider, ClientProvider, Page};
use views::{Fallback, LearnerDashboard, Login, Root, TutorDashboard, Upload};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/tutor-dashboard")]
    TutorDashboard {},
    #[route("/learner-dashboard")]
    LearnerDashboard {},
    #[route("/upload")]
    Upload {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

impl Route {
    fn for_page(page: Page) -> Self {
        match page {
            Page::Landing => Route::Root {},
            Page::Login => Route::Login {},
            Page::TutorDashboard => Route::TutorDashboard {},
            Page::LearnerDashboard => Route::LearnerDashboard {},
            Page::Upload => Route::Upload {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG_TOML: &str = include_str!("../tutorhub.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the bundled settings, falling back to defaults when they are broken.
fn load_config(source: &str) -> ClientConfig {
    match ClientConfig::from_toml(source) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| load_config(CONFIG_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ClientProvider {
            config,
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = ClientConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_broken_config_falls_back() {
        assert_eq!(load_config("[api\nbase_url ="), ClientConfig::default());
    }

    #[test]
    fn test_every_page_has_a_route() {
        for page in Page::ALL {
            assert_eq!(Route::for_page(page).to_string(), page.path());
        }
    }

    #[test]
    fn test_unknown_paths_hit_fallback() {
        let route: Route = "/courses/42".parse().unwrap();
        assert_eq!(
            route,
            Route::Fallback {
                segments: vec!["courses".to_string(), "42".to_string()]
            }
        );
    }
}
