//! HTTP Utilities
//!
//! This module contains HTTP-related utilities:
//! - Header management
//! - The pluggable transport and its `reqwest` implementation

pub mod headers;
pub mod transport;

// Re-export main types
pub use headers::*;
pub use transport::*;
