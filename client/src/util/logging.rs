//! Browser logging setup.
//!
//! Session transitions log through the `log` facade. In the browser the
//! records go to the devtools console; during SSR they reach the server's
//! tracing subscriber instead, so this only matters for `hydrate` builds.

/// Route `log` records and panics to the browser console.
///
/// Safe to call more than once; later calls leave the first logger in place.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::debug!("console logger already installed");
        }
    }
}
