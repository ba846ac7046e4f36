//! # Route guarding
//!
//! [`resolve`] maps a requested path and the current [`Access`] to the page
//! to render or the page to redirect to:
//!
//! | Path | Anonymous | Tutor | Learner |
//! |------|-----------|-------|---------|
//! | `/` | Landing | Landing | Landing |
//! | `/login` | Login | → `/tutor-dashboard` | → `/learner-dashboard` |
//! | `/tutor-dashboard` | → `/login` | TutorDashboard | → `/login` |
//! | `/learner-dashboard` | → `/login` | → `/login` | LearnerDashboard |
//! | `/upload` | → `/login` | Upload | → `/login` |
//! | anything else | → `/login` | → `/tutor-dashboard` | → `/learner-dashboard` |
//!
//! Every redirect target renders under the same access, so following a
//! redirect never loops.

use store::{Access, Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Login,
    TutorDashboard,
    LearnerDashboard,
    Upload,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Landing,
        Page::Login,
        Page::TutorDashboard,
        Page::LearnerDashboard,
        Page::Upload,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Login => "/login",
            Page::TutorDashboard => "/tutor-dashboard",
            Page::LearnerDashboard => "/learner-dashboard",
            Page::Upload => "/upload",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize(path);
        Self::ALL.into_iter().find(|page| page.path() == path)
    }

    /// Home page for a logged-in role.
    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Tutor => Page::TutorDashboard,
            Role::Learner => Page::LearnerDashboard,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    Redirect(Page),
}

/// Drop the query string, the fragment and one trailing slash.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some("") | None => {
            if path.is_empty() {
                "/"
            } else {
                path
            }
        }
        Some(trimmed) => trimmed,
    }
}

pub fn resolve(path: &str, access: Access) -> Resolution {
    use Resolution::{Redirect, Render};

    let Some(page) = Page::from_path(path) else {
        return match access {
            Access::Anonymous => Redirect(Page::Login),
            Access::Authenticated(role) => Redirect(Page::dashboard(role)),
        };
    };

    match (page, access) {
        (Page::Landing, _) => Render(Page::Landing),
        (Page::Login, Access::Anonymous) => Render(Page::Login),
        (Page::Login, Access::Authenticated(role)) => Redirect(Page::dashboard(role)),
        (Page::TutorDashboard, Access::Authenticated(Role::Tutor)) => Render(Page::TutorDashboard),
        (Page::LearnerDashboard, Access::Authenticated(Role::Learner)) => {
            Render(Page::LearnerDashboard)
        }
        (Page::Upload, Access::Authenticated(Role::Tutor)) => Render(Page::Upload),
        (Page::TutorDashboard | Page::LearnerDashboard | Page::Upload, _) => Redirect(Page::Login),
    }
}
