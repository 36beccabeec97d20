use crate::base::context::CapabilityResultExt;
use crate::base::error::HostnameError;

/// Source of the raw, OS-reported hostname.
pub trait HostnameSource: Send + Sync {
    fn hostname(&self) -> Result<String, HostnameError>;
}

/// Reads the kernel hostname through `sys-info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    fn hostname(&self) -> Result<String, HostnameError> {
        let name = sys_info::hostname().capability_context("os hostname")?;
        tracing::debug!(hostname = %name, "read OS hostname");
        Ok(name)
    }
}

/// A hostname fixed at construction, or a fixed failure.
#[derive(Debug, Clone)]
pub struct FixedHostname(Result<String, HostnameError>);

impl FixedHostname {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Ok(name.into()))
    }

    /// A source whose every read fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self(Err(HostnameError::capability(
            "os hostname",
            std::io::Error::other(message.to_string()),
        )))
    }
}

impl HostnameSource for FixedHostname {
    fn hostname(&self) -> Result<String, HostnameError> {
        self.0.clone()
    }
}
