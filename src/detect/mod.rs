//! Self-identification: which fully-qualified name should other nodes use
//! to reach this machine.
//!
//! - [`overrides`]: operator escape hatch, trusted verbatim
//! - [`validator`]: forward/reverse DNS round-trip check
//! - [`expander`]: search-domain qualification of short names
//! - [`finder`]: the decision procedure tying them together

pub mod candidate;
pub mod config;
pub mod expander;
pub mod finder;
pub mod overrides;
pub mod validator;

pub use candidate::Candidate;
pub use config::DetectorConfig;
pub use expander::{expand, Expansions};
pub use finder::{find_our_hostname, find_our_hostname_from, HostnameDetector, Resolution, Strength};
pub use overrides::{read_override, DEFAULT_OVERRIDE_VAR};
pub use validator::{Validation, Validator};
