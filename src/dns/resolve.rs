//! Core DNS resolution types and traits.
//!
//! This module defines the `Resolve` and `ReverseResolve` traits and
//! supporting types that form the DNS capability consumed by detection.

use crate::base::error::Rejection;
use std::{fmt, future::Future, net::IpAddr, pin::Pin, sync::Arc};

/// A domain name to resolve into IP addresses.
///
/// This is a lightweight wrapper around a hostname string that provides
/// a type-safe way to pass domain names to resolvers.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Name {
    host: Box<str>,
}

impl Name {
    /// Creates a new [`Name`] from any string-like type.
    #[inline]
    pub fn new(host: impl Into<Box<str>>) -> Self {
        Self { host: host.into() }
    }

    /// View the hostname as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.host
    }

    /// The name without the trailing root dot, ASCII-lowercased.
    ///
    /// PTR answers come back in absolute form (`host.example.com.`); this is
    /// the form used when comparing names.
    pub fn normalized(&self) -> String {
        self.host.trim_end_matches('.').to_ascii_lowercase()
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::new(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Name::new(value)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.host, f)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.host, f)
    }
}

/// Alias for an `Iterator` trait object over resolved addresses.
pub type Addrs = Box<dyn Iterator<Item = IpAddr> + Send>;

/// Alias for an `Iterator` trait object over reverse-resolved names.
pub type Names = Box<dyn Iterator<Item = Name> + Send>;

/// Why a lookup produced no answer.
///
/// Detection never escalates these: a failed lookup counts the same as an
/// empty one. The message is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LookupError {
    message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<LookupError> for Rejection {
    fn from(err: LookupError) -> Self {
        Rejection::NoForwardResolution {
            cause: Some(err.message),
        }
    }
}

/// Alias for the `Future` type returned by a forward resolver.
pub type Resolving = Pin<Box<dyn Future<Output = Result<Addrs, LookupError>> + Send>>;

/// Alias for the `Future` type returned by a reverse resolver.
pub type ReverseResolving = Pin<Box<dyn Future<Output = Result<Names, LookupError>> + Send>>;

/// Forward DNS resolution: name to addresses.
///
/// Implementations must be thread-safe. Timeouts belong to the
/// implementation; a timed-out lookup is reported as an `Err`.
///
/// # Design Notes
///
/// - Uses `&self` so one resolver can serve concurrent detections.
/// - Returns boxed futures for trait object compatibility.
/// - Addresses are yielded in the order the resolver supplied them.
pub trait Resolve: Send + Sync {
    /// Resolves a domain name to IP addresses.
    fn resolve(&self, name: Name) -> Resolving;
}

/// Reverse DNS resolution: address to names (PTR).
pub trait ReverseResolve: Send + Sync {
    /// Resolves an address to the names that claim it.
    fn reverse(&self, addr: IpAddr) -> ReverseResolving;
}

/// Blanket implementation for Arc-wrapped resolvers.
impl<R: Resolve + ?Sized> Resolve for Arc<R> {
    fn resolve(&self, name: Name) -> Resolving {
        (**self).resolve(name)
    }
}

impl<R: ReverseResolve + ?Sized> ReverseResolve for Arc<R> {
    fn reverse(&self, addr: IpAddr) -> ReverseResolving {
        (**self).reverse(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_name_from_str() {
        let name = Name::from("example.com");
        assert_eq!(name.as_str(), "example.com");
        assert_eq!(name.to_string(), "example.com");
    }

    #[test]
    fn test_name_from_string() {
        let domain = String::from("test.example.com");
        let name = Name::from(domain);
        assert_eq!(name.as_str(), "test.example.com");
    }

    #[test]
    fn test_name_normalized() {
        assert_eq!(Name::new("Host.Example.COM.").normalized(), "host.example.com");
        assert_eq!(Name::new("host").normalized(), "host");
    }

    #[test]
    fn test_lookup_error_into_rejection() {
        let rejection: Rejection = LookupError::new("timed out").into();
        assert_eq!(
            rejection,
            Rejection::NoForwardResolution {
                cause: Some("timed out".into())
            }
        );
    }

    struct Loopback;

    impl Resolve for Loopback {
        fn resolve(&self, _name: Name) -> Resolving {
            Box::pin(async move {
                Ok(Box::new(std::iter::once(IpAddr::V4(Ipv4Addr::LOCALHOST))) as Addrs)
            })
        }
    }

    #[tokio::test]
    async fn test_arc_resolver_delegates() {
        let resolver: Arc<dyn Resolve> = Arc::new(Loopback);
        let addrs: Vec<_> = resolver
            .resolve(Name::new("anything"))
            .await
            .unwrap()
            .collect();
        assert_eq!(addrs, [IpAddr::V4(Ipv4Addr::LOCALHOST)]);
    }
}
