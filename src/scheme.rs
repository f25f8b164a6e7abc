use crate::compat::{String, ToString};

/// Label that stands in for an undetermined scheme.
const UNKNOWN_LABEL: &str = "UNKNOWN";

/// Outcome of scheme resolution for a single URL.
///
/// `Known` carries the scheme exactly as it was spelled in the URL or as it
/// came out of the port table; no case folding is applied anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    /// A scheme spelled out in the URL or inferred from its port
    Known(String),
    /// No scheme could be determined
    Unknown,
}

impl Scheme {
    /// Wrap a scheme name.
    pub fn known(scheme: &str) -> Self {
        Self::Known(scheme.to_string())
    }

    /// Get the scheme string, or `"UNKNOWN"` when none was determined.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(scheme) => scheme,
            Self::Unknown => UNKNOWN_LABEL,
        }
    }

    /// Check if no scheme was determined.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Check if this is a web scheme (exactly "http" or "https").
    /// Length and first byte are checked before the full comparison.
    pub fn is_web(&self) -> bool {
        let Self::Known(scheme) = self else {
            return false;
        };
        let bytes = scheme.as_bytes();
        match (bytes.len(), bytes.first()) {
            (4, Some(b'h')) => bytes == b"http",
            (5, Some(b'h')) => bytes == b"https",
            _ => false,
        }
    }
}

impl core::fmt::Display for Scheme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Scheme {
    fn from(scheme: &str) -> Self {
        Self::known(scheme)
    }
}

impl From<String> for Scheme {
    fn from(scheme: String) -> Self {
        Self::Known(scheme)
    }
}
