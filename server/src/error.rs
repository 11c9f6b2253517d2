//! Startup and serve errors for the server binary.

use std::net::SocketAddr;

use crate::config::ConfigError;

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Listener configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Leptos options could not be loaded (missing or malformed
    /// `[[workspace.metadata.leptos]]` or `LEPTOS_*` variables).
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The TCP listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
