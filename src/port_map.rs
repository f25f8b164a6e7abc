use crate::compat::{String, ToString, Vec};

const DEFAULT_PORT_SCHEMES: &[(u16, &str)] = &[
    (80, "http"),
    (8080, "http"),
    (443, "https"),
    (21, "ftp"),
    (20, "ftp"),
];

/// A table mapping network ports to scheme names.
///
/// Entries keep insertion order and ports are unique: inserting a port
/// that is already present overwrites its scheme in place.
///
/// ```
/// use skema::PortSchemeMap;
///
/// let mut ports = PortSchemeMap::defaults();
/// ports.insert(8443, "https");
/// assert_eq!(ports.get(8443), Some("https"));
/// assert_eq!(ports.get(80), Some("http"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSchemeMap {
    entries: Vec<(u16, String)>,
}

impl PortSchemeMap {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a table with the built-in well-known mappings:
    /// 80 and 8080 to `http`, 443 to `https`, 21 and 20 to `ftp`.
    pub fn defaults() -> Self {
        DEFAULT_PORT_SCHEMES
            .iter()
            .map(|&(port, scheme)| (port, scheme))
            .collect()
    }

    /// Map a port to a scheme, overwriting any existing mapping for it.
    pub fn insert(&mut self, port: u16, scheme: &str) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|&&mut (p, _)| p == port) {
            *existing = scheme.to_string();
        } else {
            self.entries.push((port, scheme.to_string()));
        }
    }

    /// Get the scheme mapped to a port.
    pub fn get(&self, port: u16) -> Option<&str> {
        self.entries
            .iter()
            .find(|&&(p, _)| p == port)
            .map(|(_, scheme)| scheme.as_str())
    }

    /// Number of mappings in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no mappings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the mappings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.entries
            .iter()
            .map(|(port, scheme)| (*port, scheme.as_str()))
    }
}

impl<S: AsRef<str>> FromIterator<(u16, S)> for PortSchemeMap {
    fn from_iter<I: IntoIterator<Item = (u16, S)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<S: AsRef<str>> Extend<(u16, S)> for PortSchemeMap {
    fn extend<I: IntoIterator<Item = (u16, S)>>(&mut self, iter: I) {
        for (port, scheme) in iter {
            self.insert(port, scheme.as_ref());
        }
    }
}
