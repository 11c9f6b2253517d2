//! Browser-side helpers.

pub mod logging;
