//! Browser services backing the workflow.
//!
//! # Services
//!
//! - [`http`] - `gloo-net` client for the presign, storage and label services
//! - [`browser`] - timers, object URLs, file reading and downloads

pub mod http;
pub mod browser;

pub use http::*;
pub use browser::*;
