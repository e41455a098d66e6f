//! Request Execution
//!
//! Everything between a `submit` call and the network:
//! - payload shaping per provider profile
//! - header assembly and the HTTP transport
//! - response classification

pub mod http;
pub mod payload;
pub mod response;

pub use payload::build_payload;
pub use response::classify_response;
