//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod navigator;
pub use navigator::{resolve, Page, Resolution};

pub mod views;

mod client;
pub use client::{use_api_client, use_config, ClientProvider};

mod auth;
pub use auth::{sign_in, sign_out, use_auth, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;
