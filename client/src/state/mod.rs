//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The console has a single piece of shared state, the session, owned by the
//! root component and handed to children through context.

pub mod session;
