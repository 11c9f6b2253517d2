//! Session holder deciding between the login and dashboard views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns one `RwSignal<Session>` and provides it as context. The login
//! page reports a submitted user through `login`; the dashboard's logout
//! button calls `logout`. Rendering reads `active_view` and nothing else.
//!
//! DESIGN
//! ======
//! Two states, `Absent` (initial) and `Present`. Both transitions are total:
//! login replaces whatever user was present, logout from `Absent` is a no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Whether an operator is signed in, and as whom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// No operator; the login page is shown.
    #[default]
    Absent,
    /// An operator is signed in; the dashboard is shown for them.
    Present(User),
}

/// The page the root component should render for a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveView {
    Login,
    Dashboard(User),
}

impl Session {
    /// Adopt `user` as the signed-in operator. Last write wins.
    pub fn login(&mut self, user: User) {
        log::info!("session login: {}", user.email);
        *self = Self::Present(user);
    }

    /// Clear the signed-in operator.
    pub fn logout(&mut self) {
        match std::mem::take(self) {
            Self::Present(user) => log::info!("session logout: {}", user.email),
            Self::Absent => log::debug!("session logout ignored: no user"),
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Absent => None,
            Self::Present(user) => Some(user),
        }
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Which page to render for the current state.
    #[must_use]
    pub fn active_view(&self) -> ActiveView {
        match self {
            Self::Absent => ActiveView::Login,
            Self::Present(user) => ActiveView::Dashboard(user.clone()),
        }
    }
}
