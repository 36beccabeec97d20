//! DNS Resolution Module
//!
//! Provides pluggable forward and reverse resolution:
//! - System resolver (getaddrinfo via thread pool, forward only)
//! - Async hickory-dns resolver (forward and PTR)
//! - Static in-memory tables for tests and pinned identities
//!
//! # Architecture
//!
//! `Resolve` and `ReverseResolve` are the capabilities hostname detection
//! consumes. Lookup failures are plain values (`LookupError`); callers
//! decide whether they matter.
//!
//! # Example
//!
//! ```rust,ignore
//! use hostdetect::dns::{Name, Resolve, HickoryResolver};
//!
//! let resolver = HickoryResolver::new();
//! let addrs = resolver.resolve(Name::new("example.com")).await?;
//! for addr in addrs {
//!     println!("Resolved: {}", addr);
//! }
//! ```

mod fixed;
mod gai;
mod hickory;
mod resolve;

pub use fixed::StaticResolver;
pub use gai::GaiResolver;
pub use hickory::HickoryResolver;
pub use resolve::{
    Addrs, LookupError, Name, Names, Resolve, Resolving, ReverseResolve, ReverseResolving,
};
