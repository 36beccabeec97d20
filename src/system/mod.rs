//! Host capabilities consumed by detection.
//!
//! Each capability is a narrow trait with a system-backed implementation
//! and a fixed one for tests and embedding:
//! - [`Environment`]: key/value lookups (`ProcessEnv`, `MapEnv`)
//! - [`HostnameSource`]: the kernel's idea of our name (`SystemHostname`, `FixedHostname`)
//! - [`SearchDomains`]: suffixes for short names (`SystemSearchDomains`, `Vec<String>`)

mod env;
mod hostname;
mod search;

pub use env::{Environment, MapEnv, ProcessEnv};
pub use hostname::{FixedHostname, HostnameSource, SystemHostname};
pub use search::{SearchDomains, SystemSearchDomains};
