//! Page modules for the two console screens.
//!
//! ARCHITECTURE
//! ============
//! Pages receive the session callbacks as props from the root gate and
//! delegate presentational pieces to `components`. Neither page touches the
//! session signal directly.

pub mod dashboard;
pub mod login;
