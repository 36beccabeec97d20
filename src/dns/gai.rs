//! System DNS resolver using getaddrinfo.
//!
//! This resolver uses the operating system's native name resolution via
//! `getaddrinfo`, executed in a thread pool to avoid blocking the async runtime.
//!
//! # When to Use
//!
//! - When forward lookups must honor `/etc/hosts` and nsswitch ordering
//! - When the OS search list should apply to short names
//!
//! `getaddrinfo` has no reverse counterpart in the standard library, so
//! this resolver only implements [`Resolve`]. Pair it with
//! [`HickoryResolver`](super::HickoryResolver) for PTR lookups.

use super::{Addrs, LookupError, Name, Resolve, Resolving};
use std::net::{IpAddr, ToSocketAddrs};

/// System DNS resolver using `getaddrinfo` in a thread pool.
///
/// Each resolution spawns a blocking task; the timeout is whatever the
/// system resolver enforces.
#[derive(Clone, Debug, Default)]
pub struct GaiResolver;

impl GaiResolver {
    /// Creates a new `GaiResolver`.
    pub fn new() -> Self {
        Self
    }
}

impl Resolve for GaiResolver {
    fn resolve(&self, name: Name) -> Resolving {
        Box::pin(async move {
            let host = name.as_str().to_string();
            let domain = host.clone();

            let result = tokio::task::spawn_blocking(move || {
                tracing::debug!(host = %host, "resolving via getaddrinfo");
                (host.as_str(), 0u16)
                    .to_socket_addrs()
                    .map(|iter| iter.map(|sa| sa.ip()).collect::<Vec<_>>())
            })
            .await;

            // Handle task join error (cancellation, panic)
            let addrs = result
                .map_err(|e| {
                    tracing::error!(error = %e, "DNS resolution task failed");
                    LookupError::new(format!("resolution task failed: {e}"))
                })?
                .map_err(|e| {
                    tracing::debug!(domain = %domain, error = %e, "DNS resolution failed");
                    LookupError::new(e.to_string())
                })?;

            // getaddrinfo repeats an address once per socket type
            let addrs = dedup_in_order(addrs);
            tracing::debug!(domain = %domain, count = addrs.len(), "DNS resolution complete");
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}

fn dedup_in_order(addrs: Vec<IpAddr>) -> Vec<IpAddr> {
    let mut unique = Vec::with_capacity(addrs.len());
    for addr in addrs {
        if !unique.contains(&addr) {
            unique.push(addr);
        }
    }
    unique
}
