//! # hostdetect
//!
//! Works out the single, stable, fully-qualified hostname other nodes and
//! configuration should use to address this machine.
//!
//! Reading the kernel hostname is not enough: DNS may be partial, the name
//! may be short, and a container's hostname may not be routable. Detection
//! therefore:
//!
//! - honors an operator override (`VESPA_HOSTNAME` by default) verbatim
//! - checks that a candidate resolves, and that some address reverse-resolves
//!   to a name resolving back to it
//! - qualifies short names with the system search domains
//! - falls back to a forward-only match rather than failing outright
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! #[tokio::main]
//! async fn main() {
//!     match hostdetect::find_our_hostname().await {
//!         Ok(name) => println!("{name}"),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error types and context helpers
//! - [`dns`] - Forward/reverse resolver capabilities
//! - [`system`] - Environment, OS hostname and search-domain capabilities
//! - [`detect`] - Override, validation, expansion and the detector itself

pub mod base;
pub mod detect;
pub mod dns;
pub mod system;

pub use base::error::{Attempt, HostnameError, Rejection};
pub use detect::{
    expand, find_our_hostname, find_our_hostname_from, DetectorConfig, HostnameDetector,
    Resolution, Strength,
};
