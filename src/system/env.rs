use crate::base::context::CapabilityResultExt;
use crate::base::error::HostnameError;
use std::collections::HashMap;
use std::env::VarError;

/// Read-only access to environment variables.
pub trait Environment: Send + Sync {
    /// Returns the value of `key`, or `None` when unset.
    ///
    /// A value that is set but unreadable (not valid UTF-8) is an error,
    /// never `None`.
    fn var(&self, key: &str) -> Result<Option<String>, HostnameError>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Result<Option<String>, HostnameError> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "environment variable unreadable");
                Err(e).capability_context("environment")
            }
        }
    }
}

/// A fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Result<Option<String>, HostnameError> {
        Ok(self.vars.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with("VESPA_HOSTNAME", "node1.example.com");
        assert_eq!(
            env.var("VESPA_HOSTNAME").unwrap().as_deref(),
            Some("node1.example.com")
        );
        assert_eq!(env.var("HOME").unwrap(), None);
    }

    #[test]
    fn test_map_env_from_iter() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("B").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_process_env_missing_key() {
        assert_eq!(ProcessEnv.var("HOSTDETECT_SURELY_UNSET_VARIABLE").unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_env_non_utf8_is_an_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let key = "HOSTDETECT_ENV_NON_UTF8_VALUE";
        std::env::set_var(key, OsStr::from_bytes(b"n\xffode.example.com"));

        let err = ProcessEnv.var(key).unwrap_err();
        match err {
            HostnameError::Capability { capability, .. } => assert_eq!(capability, "environment"),
            other => panic!("Expected Capability, got {other:?}"),
        }
    }
}
