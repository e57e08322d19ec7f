//! Async DNS resolver using hickory-dns.
//!
//! An alternative to the host resolver: queries the nameservers listed in
//! the system configuration directly, without going through libc.

use super::{Addrs, Name, Resolve, Resolving, ReverseResolving};
use crate::base::neterror::NetError;
use hickory_resolver::{
    config::{LookupIpStrategy, ResolverConfig},
    name_server::TokioConnectionProvider,
    TokioResolver,
};
use std::{
    fmt, io,
    net::{IpAddr, SocketAddr},
    sync::LazyLock,
};

/// Async DNS resolver backed by hickory-dns.
///
/// This resolver is lazily initialized on first use and shared across
/// all instances via a static `LazyLock`. It automatically configures
/// itself based on the system's DNS settings.
///
/// # Example
///
/// ```rust,ignore
/// use dnslookup::dns::{HickoryResolver, Name, Resolve};
///
/// let resolver = HickoryResolver::new();
/// let addrs = resolver.resolve(Name::new("example.com")).await?;
/// let host = resolver.resolve_reverse("8.8.8.8".parse()?).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HickoryResolver {
    resolver: &'static LazyLock<TokioResolver>,
}

impl HickoryResolver {
    /// Creates a new `HickoryResolver`.
    ///
    /// The underlying resolver is lazily initialized on first DNS query.
    /// It will attempt to read system DNS configuration; if that fails,
    /// it falls back to sensible defaults.
    pub fn new() -> Self {
        static RESOLVER: LazyLock<TokioResolver> = LazyLock::new(|| {
            let mut builder = match TokioResolver::builder_tokio() {
                Ok(builder) => {
                    tracing::debug!("Using system DNS configuration");
                    builder
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Failed to read system DNS config, using defaults"
                    );
                    TokioResolver::builder_with_config(
                        ResolverConfig::default(),
                        TokioConnectionProvider::default(),
                    )
                }
            };

            builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

            builder.build()
        });

        Self {
            resolver: &RESOLVER,
        }
    }
}

impl Default for HickoryResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn to_io_error(e: &impl fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, e.to_string())
}

/// First PTR name as a host name.
///
/// PTR names are fully qualified, so the root label is dropped. A bare root
/// name leaves nothing behind and is skipped.
fn first_ptr_host<I>(names: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    names
        .into_iter()
        .map(|name| name.to_string().trim_end_matches('.').to_owned())
        .find(|host| !host.is_empty())
}

impl Resolve for HickoryResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.clone();
        Box::pin(async move {
            let domain = name.as_str();
            tracing::debug!(domain = %domain, "resolving via hickory-dns");

            let lookup = resolver.resolver.lookup_ip(domain).await.map_err(|e| {
                tracing::debug!(domain = %domain, error = %e, "hickory-dns lookup failed");
                NetError::dns_failed(domain, to_io_error(&e))
            })?;

            let addrs: Vec<SocketAddr> = lookup.iter().map(|ip| SocketAddr::new(ip, 0)).collect();

            if addrs.is_empty() {
                return Err(NetError::dns_failed(
                    domain,
                    io::Error::new(io::ErrorKind::NotFound, "No addresses returned"),
                ));
            }

            tracing::debug!(domain = %domain, count = addrs.len(), "hickory-dns resolution complete");
            Ok::<_, NetError>(Box::new(addrs.into_iter()) as Addrs)
        })
    }

    fn resolve_reverse(&self, addr: IpAddr) -> ReverseResolving {
        let resolver = self.clone();
        Box::pin(async move {
            tracing::debug!(address = %addr, "reverse resolving via hickory-dns");

            let lookup = resolver.resolver.reverse_lookup(addr).await.map_err(|e| {
                tracing::debug!(address = %addr, error = %e, "hickory-dns reverse lookup failed");
                NetError::reverse_failed(addr, to_io_error(&e))
            })?;

            let host = first_ptr_host(lookup.iter()).ok_or_else(|| {
                NetError::reverse_failed(
                    addr,
                    io::Error::new(io::ErrorKind::NotFound, "No PTR records returned"),
                )
            })?;

            tracing::debug!(address = %addr, host = %host, "hickory-dns reverse resolution complete");
            Ok::<_, NetError>(host)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hickory_resolver_invalid_domain() {
        let resolver = HickoryResolver::new();
        let result = resolver
            .resolve(Name::new("this-domain-definitely-does-not-exist.invalid"))
            .await;

        assert!(result.is_err());
        let err = result.err().expect("Should have error");
        match err {
            NetError::NameNotResolvedFor { domain, .. } => {
                assert_eq!(domain, "this-domain-definitely-does-not-exist.invalid");
            }
            _ => panic!("Unexpected error type"),
        }
    }

    #[test]
    fn test_first_ptr_host_drops_root_label() {
        assert_eq!(first_ptr_host(["dns.google."]).as_deref(), Some("dns.google"));
        assert_eq!(first_ptr_host(["localhost"]).as_deref(), Some("localhost"));
    }

    #[test]
    fn test_first_ptr_host_skips_empty_names() {
        assert_eq!(
            first_ptr_host([".", "", "one.one.one.one.", "other.example."]).as_deref(),
            Some("one.one.one.one")
        );
        assert_eq!(first_ptr_host(["."]), None);
        assert_eq!(first_ptr_host(Vec::<String>::new()), None);
    }

    #[tokio::test]
    async fn test_hickory_reverse_loopback() {
        let resolver = HickoryResolver::new();
        // Needs a reachable nameserver with a PTR for 127.0.0.1; soft fail
        // otherwise.
        if let Ok(host) = resolver
            .resolve_reverse(IpAddr::V4(std::net::Ipv4Addr::LOCALHOST))
            .await
        {
            assert!(!host.is_empty());
            assert!(!host.ends_with('.'));
        }
    }

    #[test]
    fn test_hickory_resolver_is_clone() {
        let r1 = HickoryResolver::new();
        let r2 = r1.clone();
        // Both should point to the same static resolver
        assert!(std::ptr::eq(r1.resolver, r2.resolver));
    }
}
