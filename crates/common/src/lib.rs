//! Common types and utilities shared across all crates

pub mod config;
pub mod error;
pub mod tracing;
pub mod types;

pub use self::config::*;
pub use self::error::{Result, ServerError};
pub use self::tracing::*;
pub use self::types::*;
