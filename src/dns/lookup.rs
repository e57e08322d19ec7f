//! User-facing lookups built on top of a [`Resolve`] implementation.
//!
//! These take raw user input. Surrounding whitespace is ignored and
//! everything else, the empty string included, is left to the resolver to
//! accept or reject. A reverse lookup that the resolver cannot answer yields
//! the address literal.

use super::{Name, Resolve};
use crate::base::neterror::NetError;
use std::{io, net::IpAddr};

/// Resolves `input` to the first address the resolver returns.
pub async fn forward_lookup<R>(resolver: &R, input: &str) -> Result<IpAddr, NetError>
where
    R: Resolve + ?Sized,
{
    let domain = input.trim();
    let mut addrs = resolver.resolve(Name::new(domain)).await?;

    addrs.next().map(|addr| addr.ip()).ok_or_else(|| {
        NetError::dns_failed(
            domain,
            io::Error::new(io::ErrorKind::NotFound, "No addresses returned"),
        )
    })
}

/// Resolves `input` to a host name.
///
/// An address literal is reverse resolved; if no name can be found the
/// literal itself is returned. Anything else is treated as a host name: it
/// must resolve forward, and is then returned unchanged.
pub async fn reverse_lookup<R>(resolver: &R, input: &str) -> Result<String, NetError>
where
    R: Resolve + ?Sized,
{
    let input = input.trim();

    match input.parse::<IpAddr>() {
        Ok(addr) => match resolver.resolve_reverse(addr).await {
            Ok(host) if !host.is_empty() => Ok(host),
            Ok(_) => Ok(addr.to_string()),
            Err(e) => {
                tracing::debug!(address = %addr, error = %e, code = e.as_i32(), "no host name, using address literal");
                Ok(addr.to_string())
            }
        },
        Err(_) => {
            tracing::debug!(domain = %input, "not an address literal, validating as host name");
            resolver.resolve(Name::new(input)).await.map(drop)?;
            Ok(input.to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::{Addrs, Resolving, ReverseResolving};
    use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers `known.test` and `1.2.3.4`, fails everything else.
    #[derive(Default)]
    struct FixedResolver {
        calls: AtomicUsize,
    }

    impl Resolve for FixedResolver {
        fn resolve(&self, name: Name) -> Resolving {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                if name.as_str() == "known.test" {
                    let addrs = vec![
                        SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 0),
                        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)), 0),
                    ];
                    Ok(Box::new(addrs.into_iter()) as Addrs)
                } else {
                    Err(NetError::dns_failed(
                        name.as_str(),
                        io::Error::new(io::ErrorKind::NotFound, "Name or service not known"),
                    ))
                }
            })
        }

        fn resolve_reverse(&self, addr: IpAddr) -> ReverseResolving {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                if addr == IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)) {
                    Ok("known.test".to_owned())
                } else {
                    Err(NetError::reverse_failed(
                        addr,
                        io::Error::new(io::ErrorKind::NotFound, "no PTR record"),
                    ))
                }
            })
        }
    }

    #[tokio::test]
    async fn test_forward_returns_first_address() {
        let resolver = FixedResolver::default();
        let ip = forward_lookup(&resolver, "  known.test\t").await.unwrap();
        assert_eq!(ip, IpAddr::V6(Ipv6Addr::LOCALHOST));
    }

    #[tokio::test]
    async fn test_forward_failure_carries_domain() {
        let resolver = FixedResolver::default();
        let err = forward_lookup(&resolver, "missing.test").await.unwrap_err();
        assert_eq!(err.to_string(), "missing.test: Name or service not known");
    }

    #[tokio::test]
    async fn test_empty_input_reaches_resolver() {
        let resolver = FixedResolver::default();
        let err = forward_lookup(&resolver, "   ").await.unwrap_err();
        match err {
            NetError::NameNotResolvedFor { domain, .. } => assert_eq!(domain, ""),
            other => panic!("Unexpected error type: {other:?}"),
        }

        let err = reverse_lookup(&resolver, "").await.unwrap_err();
        assert!(matches!(err, NetError::NameNotResolvedFor { .. }));
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_reverse_known_address() {
        let resolver = FixedResolver::default();
        let host = reverse_lookup(&resolver, "1.2.3.4").await.unwrap();
        assert_eq!(host, "known.test");
    }

    #[tokio::test]
    async fn test_reverse_unknown_address_returns_literal() {
        let resolver = FixedResolver::default();
        let host = reverse_lookup(&resolver, "192.0.2.55").await.unwrap();
        assert_eq!(host, "192.0.2.55");

        let host = reverse_lookup(&resolver, "2001:db8::1").await.unwrap();
        assert_eq!(host, "2001:db8::1");
    }

    #[tokio::test]
    async fn test_reverse_host_name_input() {
        let resolver = FixedResolver::default();
        assert_eq!(
            reverse_lookup(&resolver, "known.test").await.unwrap(),
            "known.test"
        );

        let err = reverse_lookup(&resolver, "not-an-ip").await.unwrap_err();
        assert!(matches!(err, NetError::NameNotResolvedFor { .. }));
    }
}
