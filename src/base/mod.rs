//! Base types and error handling.
//!
//! - [`error`]: [`HostnameError`](error::HostnameError) and per-candidate
//!   [`Rejection`](error::Rejection)s
//! - [`context`]: attaching capability context to foreign errors

pub mod context;
pub mod error;
