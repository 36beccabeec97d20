use hickory_resolver::system_conf::read_system_conf;

/// Ordered list of domain suffixes to try on short names.
pub trait SearchDomains: Send + Sync {
    fn search_domains(&self) -> Vec<String>;
}

/// Search domains from the system resolver configuration
/// (`/etc/resolv.conf` on Unix, adapter settings on Windows).
///
/// Uses the `search` list when present, else the single `domain` entry.
/// An unreadable configuration counts as no search domains.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSearchDomains;

impl SearchDomains for SystemSearchDomains {
    fn search_domains(&self) -> Vec<String> {
        let (config, _opts) = match read_system_conf() {
            Ok(conf) => conf,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read system resolver config, no search domains");
                return Vec::new();
            }
        };

        let mut domains: Vec<String> = config
            .search()
            .iter()
            .map(|name| trim_root(&name.to_utf8()))
            .collect();
        if domains.is_empty() {
            domains.extend(config.domain().map(|name| trim_root(&name.to_utf8())));
        }
        domains.retain(|d| !d.is_empty());

        tracing::debug!(?domains, "read system search domains");
        domains
    }
}

fn trim_root(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

impl SearchDomains for Vec<String> {
    fn search_domains(&self) -> Vec<String> {
        self.clone()
    }
}
