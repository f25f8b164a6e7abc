/// Errors that can occur while querying the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A query was made with no URL while the registry has never held one
    MissingUrl,
}

impl core::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MissingUrl => "Missing URL",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ResolveError {}

/// Result type for resolver operations
pub type Result<T> = core::result::Result<T, ResolveError>;
