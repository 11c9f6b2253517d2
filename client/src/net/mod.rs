//! Data shapes exchanged between pages.
//!
//! The console has no API client; `types` only defines the records that the
//! login page produces and the dashboard displays.

pub mod types;
