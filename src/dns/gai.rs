//! System DNS resolver using getaddrinfo and getnameinfo.
//!
//! This resolver uses the operating system's native name resolution, so it
//! honours /etc/hosts, nsswitch and whatever cache the host runs. The
//! blocking libc calls are executed in tokio's blocking pool.

use super::{Addrs, Name, Resolve, Resolving, ReverseResolving};
use crate::base::{context::IoResultExt, neterror::NetError};
use std::{
    io,
    net::{IpAddr, SocketAddr, ToSocketAddrs},
};

/// System DNS resolver using `getaddrinfo`/`getnameinfo` in a thread pool.
///
/// Forward lookups go through the standard library's `ToSocketAddrs`;
/// reverse lookups through [`dns_lookup::lookup_addr`].
#[derive(Clone, Debug, Default)]
pub struct GaiResolver;

impl GaiResolver {
    /// Creates a new `GaiResolver`.
    pub fn new() -> Self {
        Self
    }
}

/// Runs a blocking libc lookup on tokio's blocking pool.
///
/// A task that panics or is cancelled surfaces as an `io::Error`.
async fn run_blocking<T, F>(f: F) -> io::Result<T>
where
    F: FnOnce() -> io::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "resolution task failed");
        Err(io::Error::other(e))
    })
}

impl Resolve for GaiResolver {
    fn resolve(&self, name: Name) -> Resolving {
        Box::pin(async move {
            let host = name.as_str().to_string();
            let domain = host.clone();

            let addrs = run_blocking(move || {
                tracing::debug!(host = %host, "resolving via getaddrinfo");
                (host.as_str(), 0u16)
                    .to_socket_addrs()
                    .map(|iter| iter.collect::<Vec<SocketAddr>>())
            })
            .await
            .dns_context(&domain)
            .inspect_err(|e| {
                tracing::debug!(domain = %domain, error = %e, "DNS resolution failed");
            })?;

            if addrs.is_empty() {
                return Err(NetError::dns_failed(
                    domain,
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        "No addresses returned by getaddrinfo",
                    ),
                ));
            }

            tracing::debug!(domain = %domain, count = addrs.len(), "DNS resolution complete");
            Ok::<_, NetError>(Box::new(addrs.into_iter()) as Addrs)
        })
    }

    fn resolve_reverse(&self, addr: IpAddr) -> ReverseResolving {
        Box::pin(async move {
            let host = run_blocking(move || {
                tracing::debug!(address = %addr, "resolving via getnameinfo");
                dns_lookup::lookup_addr(&addr)
            })
            .await
            .reverse_context(addr)?;

            tracing::debug!(address = %addr, host = %host, "reverse resolution complete");
            Ok::<_, NetError>(host)
        })
    }
}
