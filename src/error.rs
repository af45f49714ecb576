//! Error types for the fallible edges of the controller.
//!
//! Missing page regions are not errors; see [`crate::dom`]. Only configuration
//! parsing and mounting into a browser environment can fail.

/// Failure to parse page-supplied configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`crate::config::Config`].
    #[error("invalid storefront config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to attach the controller to the current page.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// No global `window` object (not running in a browser).
    #[error("no window available")]
    NoWindow,
    /// The window has no `document`.
    #[error("no document available")]
    NoDocument,
    /// `addEventListener` rejected a listener.
    #[error("failed to register {event} listener: {detail}")]
    Listener { event: &'static str, detail: String },
}
