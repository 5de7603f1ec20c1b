//! Deployment-validation sample app.
//!
//! A static-content HTTP responder used to verify that a container image
//! pushed through the deployment pipeline actually serves traffic: it binds
//! a port taken from the `PORT` environment variable (default 3000) and
//! answers `GET /` with a fixed HTML greeting.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP router and handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
