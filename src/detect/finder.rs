//! End-to-end hostname detection.
//!
//! Decision procedure, one call at a time and no state kept between calls:
//!
//! 1. A non-empty override wins outright.
//! 2. Otherwise the OS hostname is the starting candidate; failing to read
//!    it is fatal.
//! 3. The candidate and its search-domain expansions are validated in
//!    order; the first usable one wins.
//! 4. Failing that, the best candidate that at least resolved forward is
//!    used.
//! 5. Failing that, the error lists every candidate tried and why it was
//!    rejected.

use super::candidate::Candidate;
use super::config::DetectorConfig;
use super::expander::expand;
use super::overrides::read_override;
use super::validator::{Validation, Validator};
use crate::base::error::{Attempt, HostnameError};
use crate::dns::{HickoryResolver, Resolve, ReverseResolve};
use crate::system::{
    Environment, HostnameSource, ProcessEnv, SearchDomains, SystemHostname, SystemSearchDomains,
};
use std::fmt;
use std::sync::Arc;

/// How much a detected hostname was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    /// Taken from the operator override, unchecked.
    Override,
    /// Forward and reverse DNS agree.
    Verified,
    /// Resolves and lies under a trusted suffix.
    Trusted,
    /// Resolves forward only; nothing better was found.
    Weak,
}

/// A detected hostname and how it was established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub hostname: String,
    pub strength: Strength,
}

impl Resolution {
    fn new(hostname: impl Into<String>, strength: Strength) -> Self {
        Self {
            hostname: hostname.into(),
            strength,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hostname)
    }
}

/// Determines the name this machine should be addressed by.
///
/// Every capability is injectable; [`HostnameDetector::new`] wires the
/// system ones.
///
/// # Example
///
/// ```rust,ignore
/// use hostdetect::HostnameDetector;
///
/// let hostname = HostnameDetector::new().find_our_hostname().await?;
/// ```
#[derive(Clone)]
pub struct HostnameDetector {
    config: DetectorConfig,
    env: Arc<dyn Environment>,
    hostname: Arc<dyn HostnameSource>,
    search: Arc<dyn SearchDomains>,
    forward: Arc<dyn Resolve>,
    reverse: Arc<dyn ReverseResolve>,
}

impl Default for HostnameDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl HostnameDetector {
    /// Create a detector backed by the process environment, the kernel
    /// hostname, the system search list and hickory-dns.
    pub fn new() -> Self {
        Self::with_config(DetectorConfig::default())
    }

    /// Create a system-backed detector with custom configuration.
    pub fn with_config(config: DetectorConfig) -> Self {
        let dns = Arc::new(HickoryResolver::new());
        Self {
            config,
            env: Arc::new(ProcessEnv),
            hostname: Arc::new(SystemHostname),
            search: Arc::new(SystemSearchDomains),
            forward: dns.clone(),
            reverse: dns,
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Replace the environment capability.
    pub fn environment(mut self, env: impl Environment + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the OS hostname capability.
    pub fn hostname_source(mut self, source: impl HostnameSource + 'static) -> Self {
        self.hostname = Arc::new(source);
        self
    }

    /// Replace the search-domain capability.
    pub fn search_domains(mut self, search: impl SearchDomains + 'static) -> Self {
        self.search = Arc::new(search);
        self
    }

    /// Use one resolver for both directions.
    pub fn resolver<R>(mut self, resolver: R) -> Self
    where
        R: Resolve + ReverseResolve + 'static,
    {
        let resolver = Arc::new(resolver);
        self.forward = resolver.clone();
        self.reverse = resolver;
        self
    }

    /// Replace the forward resolver only.
    pub fn forward_resolver(mut self, resolver: Arc<dyn Resolve>) -> Self {
        self.forward = resolver;
        self
    }

    /// Replace the reverse resolver only.
    pub fn reverse_resolver(mut self, resolver: Arc<dyn ReverseResolve>) -> Self {
        self.reverse = resolver;
        self
    }

    /// The hostname other nodes should use for this machine.
    pub async fn find_our_hostname(&self) -> Result<String, HostnameError> {
        self.detect().await.map(|r| r.hostname)
    }

    /// Like [`find_our_hostname`](Self::find_our_hostname), starting from
    /// `candidate` instead of the override and the OS hostname.
    pub async fn find_our_hostname_from(&self, candidate: &str) -> Result<String, HostnameError> {
        self.detect_from(candidate).await.map(|r| r.hostname)
    }

    /// Full detection, reporting how the result was established.
    pub async fn detect(&self) -> Result<Resolution, HostnameError> {
        if let Some(value) = read_override(self.env.as_ref(), &self.config.override_var)? {
            tracing::info!(hostname = %value, key = %self.config.override_var, "using hostname override");
            return Ok(Resolution::new(value, Strength::Override));
        }

        let raw = self.hostname.hostname()?;
        self.detect_from(&raw).await
    }

    /// Detection starting from `candidate`, bypassing the override.
    pub async fn detect_from(&self, candidate: &str) -> Result<Resolution, HostnameError> {
        // an implausible start has no meaningful expansions either
        if let Err(rejection) = Candidate::new(candidate) {
            let err = HostnameError::exhausted(vec![Attempt::new(candidate, rejection)]);
            tracing::warn!(error = %err, "hostname detection failed");
            return Err(err);
        }

        let search = match &self.config.search_domains {
            Some(domains) => domains.clone(),
            None => self.search.search_domains(),
        };
        let validator = Validator::new(self.forward.as_ref(), self.reverse.as_ref(), &self.config);

        let mut attempts: Vec<Attempt> = Vec::new();
        let mut weak: Option<Candidate> = None;

        for name in expand(candidate, &search) {
            let candidate = match Candidate::new(&name) {
                Ok(candidate) => candidate,
                Err(rejection) => {
                    attempts.push(Attempt::new(name, rejection));
                    continue;
                }
            };

            match validator.validate(&candidate).await {
                Validation::Valid { hostname, strength } => {
                    let hostname = self.finish(hostname);
                    tracing::info!(hostname = %hostname, ?strength, "detected hostname");
                    return Ok(Resolution::new(hostname, strength));
                }
                Validation::Invalid(rejection) => {
                    tracing::debug!(candidate = %candidate, reason = %rejection, "candidate rejected");
                    if rejection.is_weak() && prefer_weak(weak.as_ref(), &candidate) {
                        weak = Some(candidate.clone());
                    }
                    attempts.push(Attempt::new(candidate.as_str(), rejection));
                }
            }
        }

        if let Some(weak) = weak {
            let hostname = self.finish(weak.to_string());
            tracing::warn!(hostname = %hostname, "no candidate passed the reverse check, using one that only resolves forward");
            return Ok(Resolution::new(hostname, Strength::Weak));
        }

        let err = HostnameError::exhausted(attempts);
        tracing::warn!(error = %err, "hostname detection failed");
        Err(err)
    }

    fn finish(&self, hostname: String) -> String {
        let trimmed = hostname.trim_end_matches('.');
        if self.config.strip_trailing_dot && !trimmed.is_empty() {
            trimmed.to_string()
        } else {
            hostname
        }
    }
}

/// The first dotted weak candidate wins; a short one only holds the slot
/// until a dotted one turns up.
fn prefer_weak(current: Option<&Candidate>, next: &Candidate) -> bool {
    match current {
        None => true,
        Some(current) => !current.is_qualified() && next.is_qualified(),
    }
}

impl fmt::Debug for HostnameDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostnameDetector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// [`HostnameDetector::find_our_hostname`] on a system-backed detector.
pub async fn find_our_hostname() -> Result<String, HostnameError> {
    HostnameDetector::new().find_our_hostname().await
}

/// [`HostnameDetector::find_our_hostname_from`] on a system-backed detector.
pub async fn find_our_hostname_from(candidate: &str) -> Result<String, HostnameError> {
    HostnameDetector::new().find_our_hostname_from(candidate).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(name: &str) -> Candidate {
        Candidate::new(name).unwrap()
    }

    #[test]
    fn test_prefer_weak() {
        assert!(prefer_weak(None, &cand("node1")));
        assert!(prefer_weak(Some(&cand("node1")), &cand("node1.example.com")));
        assert!(!prefer_weak(Some(&cand("node1")), &cand("node2")));
        assert!(!prefer_weak(
            Some(&cand("node1.example.com")),
            &cand("node1.internal")
        ));
    }
}
