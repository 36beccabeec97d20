//! Ergonomic error context helpers.
//!
//! Provides an extension trait for turning foreign capability errors
//! (syscall wrappers, config readers) into context-rich `HostnameError`s.

use crate::base::error::HostnameError;

/// Extension trait for attaching capability context to a `Result`.
pub trait CapabilityResultExt<T> {
    /// Tag a failure with the capability that produced it.
    ///
    /// # Example
    /// ```ignore
    /// use hostdetect::base::context::CapabilityResultExt;
    ///
    /// let name = sys_info::hostname().capability_context("os hostname")?;
    /// // Error: "os hostname unavailable: ..."
    /// ```
    fn capability_context(self, capability: &'static str) -> Result<T, HostnameError>;
}

impl<T, E> CapabilityResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn capability_context(self, capability: &'static str) -> Result<T, HostnameError> {
        self.map_err(|e| HostnameError::capability(capability, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Error, ErrorKind};

    #[test]
    fn test_capability_context() {
        let result: Result<(), io::Error> =
            Err(Error::new(ErrorKind::PermissionDenied, "denied"));
        let err = result.capability_context("os hostname").unwrap_err();

        match &err {
            HostnameError::Capability { capability, .. } => {
                assert_eq!(*capability, "os hostname");
            }
            _ => panic!("Expected Capability"),
        }
        assert_eq!(err.to_string(), "os hostname unavailable: denied");
        assert!(err.attempts().is_empty());
    }

    #[test]
    fn test_ok_passes_through() {
        let result: Result<u8, io::Error> = Ok(7);
        assert_eq!(result.capability_context("environment").unwrap(), 7);
    }
}
