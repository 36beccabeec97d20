//! Async DNS resolver using hickory-dns.
//!
//! This resolver provides fully async forward and reverse resolution with:
//! - System DNS configuration auto-detection
//! - IPv4 + IPv6 lookups
//! - PTR lookups for the reverse half of the round-trip check
//!
//! Unlike `GaiResolver`, this resolver is fully async and doesn't require
//! spawning blocking tasks.

use super::{Addrs, LookupError, Name, Names, Resolve, Resolving, ReverseResolve, ReverseResolving};
use hickory_resolver::{
    config::{LookupIpStrategy, ResolverConfig},
    name_server::TokioConnectionProvider,
    TokioResolver,
};
use std::{net::IpAddr, sync::LazyLock};

/// Async DNS resolver backed by hickory-dns.
///
/// This resolver is lazily initialized on first use and shared across
/// all instances via a static `LazyLock`. It automatically configures
/// itself based on the system's DNS settings.
///
/// # Example
///
/// ```rust,ignore
/// use hostdetect::dns::{HickoryResolver, Name, Resolve, ReverseResolve};
///
/// let resolver = HickoryResolver::new();
/// let addrs = resolver.resolve(Name::new("example.com")).await?;
/// for addr in addrs {
///     let names = resolver.reverse(addr).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HickoryResolver {
    resolver: &'static LazyLock<TokioResolver>,
}

impl HickoryResolver {
    /// Creates a new `HickoryResolver`.
    ///
    /// The underlying resolver is lazily initialized on first DNS query.
    /// It will attempt to read system DNS configuration; if that fails,
    /// it falls back to sensible defaults.
    pub fn new() -> Self {
        static RESOLVER: LazyLock<TokioResolver> = LazyLock::new(|| {
            let mut builder = match TokioResolver::builder_tokio() {
                Ok(builder) => {
                    tracing::debug!("Using system DNS configuration");
                    builder
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Failed to read system DNS config, using defaults"
                    );
                    TokioResolver::builder_with_config(
                        ResolverConfig::default(),
                        TokioConnectionProvider::default(),
                    )
                }
            };

            builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

            builder.build()
        });

        Self {
            resolver: &RESOLVER,
        }
    }
}

impl Default for HickoryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolve for HickoryResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.clone();
        Box::pin(async move {
            let domain = name.as_str();
            tracing::debug!(domain = %domain, "resolving via hickory-dns");

            let lookup = resolver.resolver.lookup_ip(domain).await.map_err(|e| {
                tracing::debug!(domain = %domain, error = %e, "hickory-dns lookup failed");
                LookupError::new(e.to_string())
            })?;

            let addrs: Vec<IpAddr> = lookup.iter().collect();

            tracing::debug!(domain = %domain, count = addrs.len(), "hickory-dns resolution complete");
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}

impl ReverseResolve for HickoryResolver {
    fn reverse(&self, addr: IpAddr) -> ReverseResolving {
        let resolver = self.clone();
        Box::pin(async move {
            tracing::debug!(addr = %addr, "reverse lookup via hickory-dns");

            let lookup = resolver.resolver.reverse_lookup(addr).await.map_err(|e| {
                tracing::debug!(addr = %addr, error = %e, "hickory-dns reverse lookup failed");
                LookupError::new(e.to_string())
            })?;

            let names: Vec<Name> = lookup.iter().map(|ptr| Name::new(ptr.to_utf8())).collect();

            tracing::debug!(addr = %addr, count = names.len(), "hickory-dns reverse lookup complete");
            Ok(Box::new(names.into_iter()) as Names)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hickory_resolver_invalid_domain() {
        let resolver = HickoryResolver::new();
        let result = resolver
            .resolve(Name::new("this-domain-definitely-does-not-exist.invalid"))
            .await;

        assert!(result.is_err());
    }

    #[test]
    fn test_hickory_resolver_is_clone() {
        let r1 = HickoryResolver::new();
        let r2 = r1.clone();
        // Both should point to the same static resolver
        assert!(std::ptr::eq(r1.resolver, r2.resolver));
    }
}
