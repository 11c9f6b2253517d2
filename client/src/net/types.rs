//! User record shared by the login and dashboard pages.
//!
//! DESIGN
//! ======
//! The record is deliberately minimal: an email-like identifier is the only
//! thing the dashboard needs. Construction goes through [`User::new`] so a
//! blank identifier never reaches the session.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Errors raised when building a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    /// The identifier was empty after trimming.
    #[error("user record has no identifier")]
    MissingIdentifier,
}

/// The operator currently signed in to the console.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Email-like identifier shown in the header and welcome panel.
    pub email: String,
}

impl User {
    /// Build a user record from an identifier, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::MissingIdentifier`] if nothing is left after trimming.
    pub fn new(email: impl AsRef<str>) -> Result<Self, UserError> {
        let email = email.as_ref().trim();
        if email.is_empty() {
            return Err(UserError::MissingIdentifier);
        }
        Ok(Self { email: email.to_owned() })
    }
}
