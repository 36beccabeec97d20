use crate::base::error::Rejection;
use std::fmt;

/// A hostname under evaluation.
///
/// Non-empty and free of whitespace and control characters. Nothing else is
/// checked here; whether the name is usable is the validator's call.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Candidate {
    name: Box<str>,
}

impl Candidate {
    pub fn new(name: &str) -> Result<Self, Rejection> {
        if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Rejection::Malformed);
        }
        Ok(Self { name: name.into() })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// True when the name already carries a domain (`host.example.com`).
    pub fn is_qualified(&self) -> bool {
        self.name.contains('.')
    }

    /// True when `name` is this candidate followed by a domain.
    ///
    /// Case-insensitive, ignores a trailing root dot on `name`.
    pub fn is_qualified_by(&self, name: &str) -> bool {
        let name = name.trim_end_matches('.');
        name.len() > self.name.len() + 1
            && name.as_bytes()[self.name.len()] == b'.'
            && name[..self.name.len()].eq_ignore_ascii_case(&self.name)
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.name, f)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}
