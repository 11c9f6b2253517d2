//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are purely presentational; they take display values and
//! callbacks as props and never read the session context.

pub mod app_header;
pub mod stat_card;
