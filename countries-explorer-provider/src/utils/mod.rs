//! Utility modules.

/// Shortens upstream payloads before they reach the logs.
pub mod log_sanitizer;
