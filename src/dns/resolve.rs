//! Core DNS resolution types and traits.
//!
//! This module defines the `Resolve` trait and supporting types that form
//! the foundation of the DNS abstraction layer.

use crate::base::neterror::NetError;
use std::{
    borrow::Cow,
    collections::HashMap,
    fmt,
    future::Future,
    net::{IpAddr, SocketAddr},
    pin::Pin,
    sync::Arc,
};

/// A domain name to resolve into IP addresses.
///
/// This is a lightweight wrapper around a hostname string that provides
/// a type-safe way to pass domain names to resolvers.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Name {
    host: Box<str>,
}

impl Name {
    /// Creates a new [`Name`] from any string-like type.
    #[inline]
    pub fn new(host: impl Into<Box<str>>) -> Self {
        Self { host: host.into() }
    }

    /// View the hostname as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.host
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::new(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Name::new(value)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.host, f)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.host, f)
    }
}

/// Alias for an `Iterator` trait object over `SocketAddr`.
pub type Addrs = Box<dyn Iterator<Item = SocketAddr> + Send>;

/// Alias for the `Future` type returned by a forward lookup.
pub type Resolving = Pin<Box<dyn Future<Output = Result<Addrs, NetError>> + Send>>;

/// Alias for the `Future` type returned by a reverse lookup.
pub type ReverseResolving = Pin<Box<dyn Future<Output = Result<String, NetError>> + Send>>;

/// Trait for DNS resolution.
///
/// The two operations the lookup tool needs from a resolver: names to
/// addresses and addresses back to names. Implementations must be
/// thread-safe.
///
/// # Design Notes
///
/// - Uses `&self` so a resolver can be shared behind an `Arc`.
/// - Returns boxed futures for trait object compatibility.
pub trait Resolve: Send + Sync {
    /// Resolves a domain name to IP addresses.
    ///
    /// The returned addresses will have port 0.
    fn resolve(&self, name: Name) -> Resolving;

    /// Resolves an IP address to a host name.
    fn resolve_reverse(&self, addr: IpAddr) -> ReverseResolving;
}

/// Blanket implementation for Arc-wrapped resolvers.
impl<R: Resolve + ?Sized> Resolve for Arc<R> {
    fn resolve(&self, name: Name) -> Resolving {
        (**self).resolve(name)
    }

    fn resolve_reverse(&self, addr: IpAddr) -> ReverseResolving {
        (**self).resolve_reverse(addr)
    }
}

/// DNS resolver wrapper that supports hostname overrides.
///
/// This resolver first checks a map of hostname-to-address overrides before
/// falling back to the underlying resolver. Reverse lookups of an address
/// that appears in the map answer with the overriding hostname.
///
/// # Example
///
/// ```rust,ignore
/// use dnslookup::dns::{DnsResolverWithOverrides, GaiResolver, Name};
/// use std::collections::HashMap;
/// use std::net::SocketAddr;
///
/// let mut overrides = HashMap::new();
/// overrides.insert(
///     "api.local".into(),
///     vec!["127.0.0.1:0".parse().unwrap()],
/// );
///
/// let resolver = DnsResolverWithOverrides::new(
///     Arc::new(GaiResolver::new()),
///     overrides,
/// );
/// ```
pub struct DnsResolverWithOverrides {
    inner: Arc<dyn Resolve>,
    overrides: Arc<HashMap<Cow<'static, str>, Vec<SocketAddr>>>,
}

impl DnsResolverWithOverrides {
    /// Creates a new resolver with the given overrides.
    ///
    /// # Arguments
    ///
    /// * `inner` - The fallback resolver for non-overridden lookups.
    /// * `overrides` - Map of hostnames to their resolved addresses.
    pub fn new(
        inner: Arc<dyn Resolve>,
        overrides: HashMap<Cow<'static, str>, Vec<SocketAddr>>,
    ) -> Self {
        Self {
            inner,
            overrides: Arc::new(overrides),
        }
    }

    /// Returns the number of configured overrides.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    fn host_for(&self, addr: IpAddr) -> Option<&str> {
        // Smallest matching name, so the answer does not depend on map order.
        self.overrides
            .iter()
            .filter(|(_, addrs)| addrs.iter().any(|a| a.ip() == addr))
            .map(|(host, _)| host.as_ref())
            .min()
    }
}

impl Resolve for DnsResolverWithOverrides {
    fn resolve(&self, name: Name) -> Resolving {
        // Check overrides first
        if let Some(addrs) = self.overrides.get(name.as_str()) {
            tracing::debug!(domain = %name, "answered from overrides");
            let addrs: Addrs = Box::new(addrs.clone().into_iter());
            return Box::pin(std::future::ready(Ok::<_, NetError>(addrs)));
        }
        // Fall back to inner resolver
        self.inner.resolve(name)
    }

    fn resolve_reverse(&self, addr: IpAddr) -> ReverseResolving {
        if let Some(host) = self.host_for(addr) {
            tracing::debug!(address = %addr, host = %host, "answered from overrides");
            return Box::pin(std::future::ready(Ok::<_, NetError>(host.to_owned())));
        }
        self.inner.resolve_reverse(addr)
    }
}

impl fmt::Debug for DnsResolverWithOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsResolverWithOverrides")
            .field("override_count", &self.overrides.len())
            .finish_non_exhaustive()
    }
}
