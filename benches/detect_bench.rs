use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hostdetect::dns::StaticResolver;
use hostdetect::system::{FixedHostname, MapEnv};
use hostdetect::{expand, HostnameDetector};
use std::net::{IpAddr, Ipv4Addr};

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    let search: Vec<String> = ["example.com", "internal", "corp.example.net", "lab", "internal"]
        .iter()
        .map(|d| d.to_string())
        .collect();

    group.bench_function("short_name_5_domains", |b| {
        b.iter(|| black_box(expand(black_box("node1"), &search).count()));
    });

    group.bench_function("qualified_name", |b| {
        b.iter(|| black_box(expand(black_box("node1.example.com"), &search).count()));
    });

    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
    let detector = HostnameDetector::new()
        .environment(MapEnv::new())
        .hostname_source(FixedHostname::new("node1"))
        .search_domains(vec!["example.com".to_string(), "internal".to_string()])
        .resolver(StaticResolver::new().consistent_host("node1.internal", [ip]));

    group.bench_function("in_memory_last_expansion", |b| {
        b.iter(|| runtime.block_on(detector.find_our_hostname()).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_expand, bench_detect);
criterion_main!(benches);
