use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use thiserror::Error;

/// Why a single candidate was not accepted.
///
/// Rejections are local to one resolution call: they are collected per
/// candidate and only surface to callers inside
/// [`HostnameError::AllCandidatesExhausted`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("not a plausible hostname")]
    Malformed,

    #[error("does not resolve to any address{}", cause_suffix(.cause))]
    NoForwardResolution { cause: Option<String> },

    #[error("resolves to {} but no reverse name maps back to it", join_addrs(.addresses))]
    NoReverseConsistency { addresses: Vec<IpAddr> },
}

impl Rejection {
    /// True when the candidate at least forward-resolved.
    pub fn is_weak(&self) -> bool {
        matches!(self, Rejection::NoReverseConsistency { .. })
    }
}

fn cause_suffix(cause: &Option<String>) -> String {
    match cause {
        Some(cause) => format!(" ({cause})"),
        None => String::new(),
    }
}

fn join_addrs(addrs: &[IpAddr]) -> String {
    addrs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One tried candidate and the reason it was discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub candidate: String,
    pub rejection: Rejection,
}

impl Attempt {
    pub fn new(candidate: impl Into<String>, rejection: Rejection) -> Self {
        Self {
            candidate: candidate.into(),
            rejection,
        }
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.candidate, self.rejection)
    }
}

/// Errors surfaced by hostname detection.
#[derive(Debug, Error, Clone)]
pub enum HostnameError {
    /// An injected capability (OS hostname, environment) failed outright.
    #[error("{capability} unavailable: {source}")]
    Capability {
        capability: &'static str,
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// No candidate forward-resolved. Attempts are in trial order.
    #[error("no usable hostname found, tried {}", join_attempts(.attempts))]
    AllCandidatesExhausted { attempts: Vec<Attempt> },
}

fn join_attempts(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl HostnameError {
    /// Create a capability error from any error type.
    pub fn capability(
        capability: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        HostnameError::Capability {
            capability,
            source: Arc::new(source),
        }
    }

    /// Create an exhaustion error from the collected attempts.
    pub fn exhausted(attempts: Vec<Attempt>) -> Self {
        HostnameError::AllCandidatesExhausted { attempts }
    }

    /// The candidates tried before giving up, in trial order.
    ///
    /// Empty for capability failures, which abort before any candidate exists.
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            HostnameError::AllCandidatesExhausted { attempts } => attempts,
            HostnameError::Capability { .. } => &[],
        }
    }
}
