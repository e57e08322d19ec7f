//! Ergonomic error context helpers.
//!
//! Provides extension traits for adding context to `Result` types,
//! converting IO errors into context-rich `NetError` variants.

use crate::base::neterror::NetError;
use std::{io, net::IpAddr};

/// Extension trait for adding context to IO Results.
pub trait IoResultExt<T> {
    /// Add DNS resolution context to an IO error.
    ///
    /// # Example
    /// ```ignore
    /// use dnslookup::base::context::IoResultExt;
    ///
    /// let addrs = ("example.invalid", 0).to_socket_addrs()
    ///     .dns_context("example.invalid")?;
    /// // Error: "example.invalid: failed to lookup address information: ..."
    /// ```
    fn dns_context(self, domain: &str) -> Result<T, NetError>;

    /// Add reverse resolution context to an IO error.
    fn reverse_context(self, address: IpAddr) -> Result<T, NetError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn dns_context(self, domain: &str) -> Result<T, NetError> {
        self.map_err(|e| NetError::dns_failed(domain, e))
    }

    fn reverse_context(self, address: IpAddr) -> Result<T, NetError> {
        self.map_err(|e| NetError::reverse_failed(address, e))
    }
}
