use crate::compat::{String, ToString, Vec};
use crate::entry::{Resolution, UrlEntry};
use crate::error::{ResolveError, Result};
use crate::port_map::PortSchemeMap;
use crate::scheme::Scheme;

/// A stateful registry that resolves URL schemes lazily.
///
/// URLs are registered up front (or implicitly on first query) and resolved
/// on first access, against the port table and default-scheme policy in
/// effect at that moment. Once resolved, an entry keeps its outcome until
/// the same URL is registered again.
///
/// ```
/// use skema::SchemeResolver;
///
/// let mut resolver = SchemeResolver::new();
/// resolver.register("//example.com:443/path");
/// assert_eq!(resolver.scheme(None)?.as_str(), "https");
/// assert_eq!(
///     resolver.normalized_url(None)?,
///     "https://example.com:443/path"
/// );
/// # Ok::<(), skema::ResolveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeResolver {
    entries: Vec<UrlEntry>,
    port_map: PortSchemeMap,
    default_scheme: String,
    force_default_scheme: bool,
    last_registered: Option<usize>,
}

impl SchemeResolver {
    /// Create a resolver with the built-in port table and `"http"` as the
    /// default scheme.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            port_map: PortSchemeMap::defaults(),
            default_scheme: String::from("http"),
            force_default_scheme: false,
            last_registered: None,
        }
    }

    /// Create a resolver with one URL already registered.
    pub fn with_url(url: &str) -> Self {
        let mut resolver = Self::new();
        resolver.register(url);
        resolver
    }

    /// Create a resolver with a caller-supplied port table instead of the
    /// built-in one.
    pub fn with_port_map(port_map: PortSchemeMap) -> Self {
        Self {
            port_map,
            ..Self::new()
        }
    }

    /// Replace the whole port table.
    pub fn set_port_map(&mut self, port_map: PortSchemeMap) {
        self.port_map = port_map;
    }

    /// Map a single port to a scheme, overwriting any existing mapping.
    pub fn map_port(&mut self, port: u16, scheme: &str) {
        self.port_map.insert(port, scheme);
    }

    /// Set the scheme injected into protocol-relative URLs when forcing is
    /// enabled.
    pub fn set_default_scheme(&mut self, scheme: &str) {
        self.default_scheme = scheme.to_string();
    }

    /// Toggle whether protocol-relative URLs with no resolvable scheme get
    /// the default scheme injected into their normalized form.
    pub fn set_force_default_scheme(&mut self, force: bool) {
        self.force_default_scheme = force;
    }

    /// Register a URL for resolution.
    ///
    /// Registering a URL that is already present resets it to unresolved
    /// (keeping its registry position), so the next query re-resolves it
    /// under the current configuration. Either way the URL becomes the most
    /// recently registered one.
    pub fn register(&mut self, url: &str) {
        let index = match self.position(url) {
            Some(index) => {
                self.entries[index].reset();
                index
            }
            None => {
                self.entries.push(UrlEntry::new(url));
                self.entries.len() - 1
            }
        };
        self.last_registered = Some(index);
    }

    /// Resolve every still-unresolved entry, in registration order.
    ///
    /// Already-resolved entries are left alone.
    pub fn resolve_all(&mut self) {
        let Self {
            entries,
            port_map,
            default_scheme,
            force_default_scheme,
            ..
        } = self;
        for entry in entries.iter_mut() {
            entry.resolve_with(port_map, default_scheme, *force_default_scheme);
        }
    }

    /// Get the resolved scheme for a URL.
    ///
    /// With `None` the most recently registered URL is queried. A URL not
    /// yet registered is registered first and becomes the most recently
    /// registered one.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingUrl`] if no URL is supplied and none
    /// has ever been registered.
    pub fn scheme(&mut self, url: Option<&str>) -> Result<&Scheme> {
        self.resolved(url).map(|resolution| &resolution.scheme)
    }

    /// Get the normalized URL, carrying a scheme prefix where one could be
    /// resolved or forced.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingUrl`] if no URL is supplied and none
    /// has ever been registered.
    pub fn normalized_url(&mut self, url: Option<&str>) -> Result<&str> {
        self.resolved(url)
            .map(|resolution| resolution.normalized.as_str())
    }

    /// Check whether a URL resolved to a web scheme (exactly `http` or
    /// `https`).
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingUrl`] if no URL is supplied and none
    /// has ever been registered.
    pub fn is_web_scheme(&mut self, url: Option<&str>) -> Result<bool> {
        self.resolved(url).map(|resolution| resolution.scheme.is_web())
    }

    /// Get the entry for a URL, without triggering resolution.
    pub fn get(&self, url: &str) -> Option<&UrlEntry> {
        self.entries.iter().find(|entry| entry.original() == url)
    }

    /// Iterate over all entries in registration order, without triggering
    /// resolution.
    pub fn iter(&self) -> impl Iterator<Item = &UrlEntry> {
        self.entries.iter()
    }

    /// Iterate over the registered URLs in registration order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(UrlEntry::original)
    }

    /// Number of registered URLs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no URL has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The scheme used when forcing, `"http"` unless changed.
    pub fn default_scheme(&self) -> &str {
        &self.default_scheme
    }

    /// Whether forcing the default scheme is enabled.
    pub fn force_default_scheme(&self) -> bool {
        self.force_default_scheme
    }

    /// The current port table.
    pub fn port_map(&self) -> &PortSchemeMap {
        &self.port_map
    }

    /// The most recently registered URL, if any.
    pub fn last_registered(&self) -> Option<&str> {
        self.last_registered
            .and_then(|index| self.entries.get(index))
            .map(UrlEntry::original)
    }

    fn position(&self, url: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.original() == url)
    }

    /// Find the queried entry, registering it if needed, and resolve it.
    fn resolved(&mut self, url: Option<&str>) -> Result<&Resolution> {
        let index = match url {
            Some(url) => match self.position(url) {
                Some(index) => index,
                None => {
                    self.register(url);
                    self.entries.len() - 1
                }
            },
            None => self.last_registered.ok_or(ResolveError::MissingUrl)?,
        };

        let Self {
            entries,
            port_map,
            default_scheme,
            force_default_scheme,
            ..
        } = self;
        Ok(entries[index].resolve_with(port_map, default_scheme, *force_default_scheme))
    }
}

impl Default for SchemeResolver {
    fn default() -> Self {
        Self::new()
    }
}
