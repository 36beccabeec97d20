//! DNS Module Tests
//!
//! Covers:
//! - `Name` struct
//! - `StaticResolver` both directions and behind `Arc<dyn _>`

use hostdetect::dns::{Name, Resolve, ReverseResolve, StaticResolver};

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

#[test]
fn test_name_api() {
    let name = Name::new("example.com");
    assert_eq!(name.as_str(), "example.com");
    assert_eq!(name.to_string(), "example.com");
}

#[tokio::test]
async fn test_static_resolver_round_trip() {
    let ip = IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3));
    let resolver = StaticResolver::new()
        .host("node.example.com", [ip])
        .ptr(ip, ["node.example.com."]);

    let forward: Arc<dyn Resolve> = Arc::new(resolver.clone());
    let reverse: Arc<dyn ReverseResolve> = Arc::new(resolver);

    let addrs: Vec<_> = forward
        .resolve(Name::new("node.example.com"))
        .await
        .unwrap()
        .collect();
    assert_eq!(addrs, [ip]);

    let names: Vec<_> = reverse.reverse(ip).await.unwrap().collect();
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].normalized(), "node.example.com");
}
