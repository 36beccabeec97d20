//! Operator override.
//!
//! A non-empty override is returned exactly as set: no trimming and no
//! validation. It exists for hosts whose DNS cannot be trusted at all.

use crate::base::error::HostnameError;
use crate::system::Environment;

/// Environment key consulted when no other key is configured.
pub const DEFAULT_OVERRIDE_VAR: &str = "VESPA_HOSTNAME";

/// Returns the override value if `key` is set and non-empty.
///
/// An unreadable (non-UTF-8) value is an error, not "absent".
pub fn read_override(env: &dyn Environment, key: &str) -> Result<Option<String>, HostnameError> {
    let value = env.var(key)?.filter(|v| !v.is_empty());
    if let Some(value) = &value {
        tracing::debug!(key = %key, value = %value, "hostname override present");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::MapEnv;

    #[test]
    fn test_override_is_verbatim() {
        let env = MapEnv::new().with(DEFAULT_OVERRIDE_VAR, " foo.bar ");
        assert_eq!(
            read_override(&env, DEFAULT_OVERRIDE_VAR).unwrap().as_deref(),
            Some(" foo.bar ")
        );
    }

    #[test]
    fn test_empty_override_is_absent() {
        let env = MapEnv::new().with(DEFAULT_OVERRIDE_VAR, "");
        assert_eq!(read_override(&env, DEFAULT_OVERRIDE_VAR).unwrap(), None);
    }

    #[test]
    fn test_unset_override_is_absent() {
        assert_eq!(read_override(&MapEnv::new(), DEFAULT_OVERRIDE_VAR).unwrap(), None);
    }

    #[test]
    fn test_custom_key() {
        let env = MapEnv::new().with("NODE_NAME", "n1.example.com");
        assert_eq!(read_override(&env, DEFAULT_OVERRIDE_VAR).unwrap(), None);
        assert_eq!(read_override(&env, "NODE_NAME").unwrap().as_deref(), Some("n1.example.com"));
    }
}
