//! Core types for plot point generation
//!
//! This crate provides the pieces shared by every robust-plot crate: the
//! unified [`Error`] type with its [`Result`] alias, and the float validator
//! and slice helpers in [`utils`].
//!
//! # Example
//!
//! ```rust
//! use robust_core::{utils::check_finite, Error};
//!
//! let ys = vec![1.0, 2.0, f64::INFINITY];
//! let err = check_finite(&ys, "generator output").unwrap_err();
//! assert!(matches!(err, Error::NonFinite { .. }));
//! ```

pub mod error;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::utils::{check_finite, check_float};
}
