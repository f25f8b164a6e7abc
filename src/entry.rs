use crate::compat::{String, ToString, format};
use crate::extract::{authority_port, scheme_token};
use crate::port_map::PortSchemeMap;
use crate::scheme::Scheme;

/// The computed outcome for a registered URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolution {
    pub(crate) scheme: Scheme,
    pub(crate) normalized: String,
}

impl Resolution {
    /// Resolve a URL against a port table and default-scheme policy.
    ///
    /// An explicit scheme wins and leaves the URL untouched. A scheme-less
    /// URL gets its scheme from the port table, or stays [`Scheme::Unknown`].
    /// Only protocol-relative URLs (leading `//`) are ever rewritten: they
    /// get a `scheme:` prefix from the table hit, or from `default_scheme`
    /// when `force_default_scheme` is on. Forcing never changes the scheme
    /// outcome itself, only the normalized string.
    pub(crate) fn compute(
        url: &str,
        ports: &PortSchemeMap,
        default_scheme: &str,
        force_default_scheme: bool,
    ) -> Self {
        if let Some(token) = scheme_token(url) {
            return Self {
                scheme: Scheme::known(token),
                normalized: url.to_string(),
            };
        }

        let scheme = match authority_port(url).and_then(|port| ports.get(port)) {
            Some(name) => Scheme::known(name),
            None => Scheme::Unknown,
        };

        let normalized = if url.starts_with("//") {
            match &scheme {
                Scheme::Known(name) => format!("{name}:{url}"),
                Scheme::Unknown if force_default_scheme => format!("{default_scheme}:{url}"),
                Scheme::Unknown => url.to_string(),
            }
        } else {
            url.to_string()
        };

        Self { scheme, normalized }
    }
}

/// A registered URL together with its lazily computed resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    original: String,
    resolution: Option<Resolution>,
}

impl UrlEntry {
    pub(crate) fn new(url: &str) -> Self {
        Self {
            original: url.to_string(),
            resolution: None,
        }
    }

    /// Drop the cached resolution so the next query recomputes it.
    pub(crate) fn reset(&mut self) {
        self.resolution = None;
    }

    /// Resolve this entry if it has not been resolved yet.
    pub(crate) fn resolve_with(
        &mut self,
        ports: &PortSchemeMap,
        default_scheme: &str,
        force_default_scheme: bool,
    ) -> &Resolution {
        let Self {
            original,
            resolution,
        } = self;
        resolution.get_or_insert_with(|| {
            Resolution::compute(original, ports, default_scheme, force_default_scheme)
        })
    }

    /// The URL exactly as registered.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Whether this entry has been resolved since it was last registered.
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// The resolved scheme, or `None` if the entry is still unresolved.
    pub fn scheme(&self) -> Option<&Scheme> {
        self.resolution.as_ref().map(|resolution| &resolution.scheme)
    }

    /// The normalized URL, or `None` if the entry is still unresolved.
    pub fn normalized_url(&self) -> Option<&str> {
        self.resolution
            .as_ref()
            .map(|resolution| resolution.normalized.as_str())
    }
}
