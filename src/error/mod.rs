//! Error Handling Module
//!
//! This module provides the error type returned by every submission:
//! - Core error types (`SubmitError`, `ErrorCategory`)
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use trace_metrics::error::{ErrorCategory, SubmitError};
//!
//! let error = SubmitError::http(401, "unauthorized");
//! assert_eq!(error.category(), ErrorCategory::Authentication);
//! assert_eq!(error.status_code(), Some(401));
//! ```

mod conversions;
pub mod types;

pub use types::*;
