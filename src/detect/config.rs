//! Hostname detection configuration.

use super::overrides::DEFAULT_OVERRIDE_VAR;

/// Knobs for [`HostnameDetector`](super::HostnameDetector).
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Environment key holding the operator override
    pub override_var: String,
    /// Search domains to use instead of the injected source (None = ask the source)
    pub search_domains: Option<Vec<String>>,
    /// Suffixes whose names are accepted without the reverse round-trip
    pub trusted_suffixes: Vec<String>,
    /// Drop the DNS root dot from returned names
    pub strip_trailing_dot: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            override_var: DEFAULT_OVERRIDE_VAR.to_string(),
            search_domains: None,
            trusted_suffixes: Vec::new(),
            strip_trailing_dot: true,
        }
    }
}

impl DetectorConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the override environment key.
    pub fn override_var(mut self, key: impl Into<String>) -> Self {
        self.override_var = key.into();
        self
    }

    /// Pin the search domains.
    pub fn search_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Add a trusted domain suffix.
    pub fn trust_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.trusted_suffixes.push(suffix.into());
        self
    }

    /// Keep or strip the trailing root dot.
    pub fn strip_trailing_dot(mut self, strip: bool) -> Self {
        self.strip_trailing_dot = strip;
        self
    }

    /// True when `name` lies under one of the trusted suffixes.
    pub fn is_trusted(&self, name: &str) -> bool {
        let name = name.trim_end_matches('.').to_ascii_lowercase();
        self.trusted_suffixes.iter().any(|suffix| {
            let suffix = suffix.trim_matches('.').to_ascii_lowercase();
            !suffix.is_empty()
                && (name == suffix
                    || name
                        .strip_suffix(&suffix)
                        .is_some_and(|head| head.ends_with('.')))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectorConfig::default();
        assert_eq!(config.override_var, "VESPA_HOSTNAME");
        assert!(config.search_domains.is_none());
        assert!(config.trusted_suffixes.is_empty());
        assert!(config.strip_trailing_dot);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DetectorConfig::new()
            .override_var("NODE_HOSTNAME")
            .search_domains(["example.com", "internal"])
            .trust_suffix("corp.example.com")
            .strip_trailing_dot(false);

        assert_eq!(config.override_var, "NODE_HOSTNAME");
        assert_eq!(
            config.search_domains.as_deref(),
            Some(&["example.com".to_string(), "internal".to_string()][..])
        );
        assert_eq!(config.trusted_suffixes, ["corp.example.com"]);
        assert!(!config.strip_trailing_dot);
    }

    #[test]
    fn test_trusted_suffix_matching() {
        let config = DetectorConfig::new().trust_suffix(".Corp.Example.com.");

        assert!(config.is_trusted("node1.corp.example.com"));
        assert!(config.is_trusted("NODE1.CORP.EXAMPLE.COM."));
        assert!(config.is_trusted("corp.example.com"));
        assert!(!config.is_trusted("node1.notcorp.example.com"));
        assert!(!config.is_trusted("node1.example.com"));
    }

    #[test]
    fn test_blank_suffix_trusts_nothing() {
        let config = DetectorConfig::new().trust_suffix(".");
        assert!(!config.is_trusted("node1.example.com"));
    }
}
