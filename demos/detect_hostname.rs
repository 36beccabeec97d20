//! Prints the hostname this machine should be known by.
//!
//! Run with `RUST_LOG=hostdetect=debug` to see every candidate tried.
//! Pass a name to start from it instead of the OS hostname.

use hostdetect::HostnameDetector;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let detector = HostnameDetector::new();
    let resolution = match std::env::args().nth(1) {
        Some(start) => detector.detect_from(&start).await?,
        None => detector.detect().await?,
    };

    println!("{}", resolution.hostname);
    eprintln!("({:?})", resolution.strength);
    Ok(())
}
