//! Session service API module
//!
//! Provides the HTTP client for the session-creation endpoint.

mod session_api;

pub use session_api::{SessionClient, SessionFetchError};
