//! Side-by-side deployment demo API.
//!
//! Each deployed instance reports which branch and version it was built from,
//! so two instances of the same service running next to each other can be
//! told apart from the outside.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers, routes and OpenAPI document
//! - [`metrics`]: Prometheus request metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
