//! Backend test support utilities
//!
//! Shared by the backend's unit tests and integration tests.

pub mod logging;
