#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod entry;
mod error;
mod extract;
mod port_map;
mod resolver;
mod scheme;

// Public API
pub use entry::UrlEntry;
pub use error::ResolveError;
pub use port_map::PortSchemeMap;
pub use resolver::SchemeResolver;
pub use scheme::Scheme;

pub type Result<T> = core::result::Result<T, ResolveError>;
