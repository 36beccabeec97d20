//! In-memory DNS answers.
//!
//! `StaticResolver` answers both directions from fixed tables. Useful for:
//! - Testing detection without real DNS
//! - Pinning the identity of a host whose DNS is known to be broken
//! - Simulating partial DNS (forward without PTR, timeouts)

use super::{
    Addrs, LookupError, Name, Names, Resolve, Resolving, ReverseResolve, ReverseResolving,
};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    net::IpAddr,
    sync::Arc,
};

#[derive(Clone, Default)]
struct Tables {
    forward: HashMap<String, Vec<IpAddr>>,
    reverse: HashMap<IpAddr, Vec<Name>>,
    failing_names: HashSet<String>,
    failing_addrs: HashSet<IpAddr>,
}

/// DNS resolver backed by fixed forward and reverse tables.
///
/// Names are matched after trimming the root dot and ASCII-lowercasing.
/// Unknown names and addresses produce empty answers; names or addresses
/// registered with [`fail_name`](Self::fail_name) /
/// [`fail_addr`](Self::fail_addr) produce a [`LookupError`].
///
/// # Example
///
/// ```rust
/// use hostdetect::dns::StaticResolver;
/// use std::net::{IpAddr, Ipv4Addr};
///
/// let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7));
/// let resolver = StaticResolver::new()
///     .host("node7.example.com", [ip])
///     .ptr(ip, ["node7.example.com."]);
/// ```
#[derive(Clone, Default)]
pub struct StaticResolver {
    tables: Arc<Tables>,
}

impl StaticResolver {
    /// Creates an empty resolver: every lookup returns no answer.
    pub fn new() -> Self {
        Self::default()
    }

    fn tables_mut(&mut self) -> &mut Tables {
        Arc::make_mut(&mut self.tables)
    }

    /// Adds forward addresses for `name`, appended in the given order.
    pub fn host(mut self, name: &str, addrs: impl IntoIterator<Item = IpAddr>) -> Self {
        self.tables_mut()
            .forward
            .entry(key(name))
            .or_default()
            .extend(addrs);
        self
    }

    /// Adds PTR names for `addr`, appended in the given order.
    pub fn ptr<'a>(mut self, addr: IpAddr, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.tables_mut()
            .reverse
            .entry(addr)
            .or_default()
            .extend(names.into_iter().map(Name::from));
        self
    }

    /// Adds a host with matching A/AAAA and PTR records.
    pub fn consistent_host(self, name: &str, addrs: impl IntoIterator<Item = IpAddr>) -> Self {
        let addrs: Vec<IpAddr> = addrs.into_iter().collect();
        let with_forward = self.host(name, addrs.iter().copied());
        addrs
            .into_iter()
            .fold(with_forward, |resolver, addr| resolver.ptr(addr, [name]))
    }

    /// Makes forward lookups of `name` fail, as a timeout would.
    pub fn fail_name(mut self, name: &str) -> Self {
        self.tables_mut().failing_names.insert(key(name));
        self
    }

    /// Makes reverse lookups of `addr` fail.
    pub fn fail_addr(mut self, addr: IpAddr) -> Self {
        self.tables_mut().failing_addrs.insert(addr);
        self
    }
}

fn key(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

impl Resolve for StaticResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let tables = self.tables.clone();
        Box::pin(async move {
            let key = key(name.as_str());
            if tables.failing_names.contains(&key) {
                return Err(LookupError::new(format!("lookup of {name} timed out")));
            }
            let addrs = tables.forward.get(&key).cloned().unwrap_or_default();
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}

impl ReverseResolve for StaticResolver {
    fn reverse(&self, addr: IpAddr) -> ReverseResolving {
        let tables = self.tables.clone();
        Box::pin(async move {
            if tables.failing_addrs.contains(&addr) {
                return Err(LookupError::new(format!("reverse lookup of {addr} timed out")));
            }
            let names = tables.reverse.get(&addr).cloned().unwrap_or_default();
            Ok(Box::new(names.into_iter()) as Names)
        })
    }
}

impl fmt::Debug for StaticResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticResolver")
            .field("host_count", &self.tables.forward.len())
            .field("ptr_count", &self.tables.reverse.len())
            .finish_non_exhaustive()
    }
}
