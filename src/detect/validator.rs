//! Usability check for a single candidate.
//!
//! A candidate is usable when it resolves, and some address it resolves to
//! reverse-resolves to a name that resolves back to one of those same
//! addresses. Lookup failures never escape: a failed lookup is an empty one.

use super::candidate::Candidate;
use super::config::DetectorConfig;
use super::finder::Strength;
use crate::base::error::Rejection;
use crate::dns::{Name, Resolve, ReverseResolve};
use std::net::IpAddr;

/// Outcome of validating one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Usable as `hostname`, which may be a qualified form of the candidate.
    Valid { hostname: String, strength: Strength },
    Invalid(Rejection),
}

/// Validates candidates against injected resolvers.
pub struct Validator<'a> {
    forward: &'a dyn Resolve,
    reverse: &'a dyn ReverseResolve,
    config: &'a DetectorConfig,
}

impl<'a> Validator<'a> {
    pub fn new(
        forward: &'a dyn Resolve,
        reverse: &'a dyn ReverseResolve,
        config: &'a DetectorConfig,
    ) -> Self {
        Self {
            forward,
            reverse,
            config,
        }
    }

    pub async fn validate(&self, candidate: &Candidate) -> Validation {
        let addrs = match self.forward_addrs(candidate.as_str()).await {
            Ok(addrs) if !addrs.is_empty() => addrs,
            Ok(_) => return Validation::Invalid(Rejection::NoForwardResolution { cause: None }),
            Err(rejection) => return Validation::Invalid(rejection),
        };

        if candidate.is_qualified() && self.config.is_trusted(candidate.as_str()) {
            tracing::debug!(candidate = %candidate, "accepted under trusted suffix");
            return Validation::Valid {
                hostname: candidate.to_string(),
                strength: Strength::Trusted,
            };
        }

        let mut consistent = false;
        'addrs: for addr in &addrs {
            for name in self.reverse_names(*addr).await {
                if !self.round_trips(candidate, &name, &addrs).await {
                    continue;
                }
                tracing::debug!(candidate = %candidate, addr = %addr, reverse = %name, "round-trip consistent");
                // returned as the PTR spelled it; the caller decides about the root dot
                if !candidate.is_qualified() && candidate.is_qualified_by(name.as_str()) {
                    return Validation::Valid {
                        hostname: name.as_str().to_string(),
                        strength: Strength::Verified,
                    };
                }
                consistent = true;
                // a short name keeps looking for its qualified form
                if candidate.is_qualified() {
                    break 'addrs;
                }
            }
        }

        if consistent {
            return Validation::Valid {
                hostname: candidate.to_string(),
                strength: Strength::Verified,
            };
        }
        tracing::debug!(candidate = %candidate, "no reverse name maps back");
        Validation::Invalid(Rejection::NoReverseConsistency { addresses: addrs })
    }

    async fn forward_addrs(&self, name: &str) -> Result<Vec<IpAddr>, Rejection> {
        match self.forward.resolve(Name::new(name)).await {
            Ok(addrs) => Ok(addrs.collect()),
            Err(e) => {
                tracing::debug!(candidate = %name, error = %e, "forward lookup failed");
                Err(e.into())
            }
        }
    }

    async fn reverse_names(&self, addr: IpAddr) -> Vec<Name> {
        match self.reverse.reverse(addr).await {
            Ok(names) => names.filter(|name| !name.normalized().is_empty()).collect(),
            Err(e) => {
                tracing::debug!(addr = %addr, error = %e, "reverse lookup failed");
                Vec::new()
            }
        }
    }

    /// True when `name` forward-resolves to at least one of `addrs`.
    async fn round_trips(&self, candidate: &Candidate, name: &Name, addrs: &[IpAddr]) -> bool {
        if name
            .normalized()
            .eq_ignore_ascii_case(candidate.as_str().trim_end_matches('.'))
        {
            return true;
        }
        match self.forward_addrs(name.as_str()).await {
            Ok(back) => back.iter().any(|a| addrs.contains(a)),
            Err(_) => false,
        }
    }
}
