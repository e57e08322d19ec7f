//! Resolver configuration from the environment.
//!
//! - `DNSLOOKUP_RESOLVER`: `system` (default, alias `gai`) or `hickory`
//! - `DNSLOOKUP_OVERRIDES`: comma-separated `host=ip` pairs

use crate::dns::{DnsResolverWithOverrides, GaiResolver, HickoryResolver, Resolve};
use std::{
    borrow::Cow,
    collections::HashMap,
    net::{IpAddr, SocketAddr},
    str::FromStr,
    sync::Arc,
};
use thiserror::Error;

pub const RESOLVER_VAR: &str = "DNSLOOKUP_RESOLVER";
pub const OVERRIDES_VAR: &str = "DNSLOOKUP_OVERRIDES";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown resolver {0:?} (expected \"system\" or \"hickory\")")]
    UnknownResolver(String),
    #[error("invalid override {0:?} (expected host=ip)")]
    InvalidOverride(String),
}

/// Which resolver answers lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolverBackend {
    /// The host resolver (getaddrinfo/getnameinfo).
    #[default]
    System,
    /// hickory-dns, talking to the system's configured nameservers.
    Hickory,
}

impl FromStr for ResolverBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "system" | "gai" => Ok(ResolverBackend::System),
            "hickory" => Ok(ResolverBackend::Hickory),
            other => Err(ConfigError::UnknownResolver(other.to_owned())),
        }
    }
}

/// Lookup configuration.
#[derive(Debug, Clone, Default)]
pub struct LookupConfig {
    /// Resolver backend
    pub backend: ResolverBackend,
    /// Static host to address answers, checked before the backend
    pub overrides: HashMap<String, Vec<IpAddr>>,
}

impl LookupConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolver backend.
    pub fn resolver_backend(mut self, backend: ResolverBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Add a static answer for `host`.
    pub fn add_override(mut self, host: impl Into<String>, ip: IpAddr) -> Self {
        self.overrides.entry(host.into()).or_default().push(ip);
        self
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `var`, which maps a variable name to
    /// its value.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(raw) = var(RESOLVER_VAR) {
            config.backend = raw.parse()?;
        }

        if let Some(raw) = var(OVERRIDES_VAR) {
            for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                let (host, ip) = parse_override(entry)?;
                config = config.add_override(host, ip);
            }
        }

        tracing::debug!(
            backend = ?config.backend,
            overrides = config.overrides.len(),
            "lookup configuration loaded"
        );
        Ok(config)
    }

    /// Build the resolver this configuration describes.
    pub fn build_resolver(&self) -> Arc<dyn Resolve> {
        let inner: Arc<dyn Resolve> = match self.backend {
            ResolverBackend::System => Arc::new(GaiResolver::new()),
            ResolverBackend::Hickory => Arc::new(HickoryResolver::new()),
        };

        if self.overrides.is_empty() {
            return inner;
        }

        let overrides: HashMap<Cow<'static, str>, Vec<SocketAddr>> = self
            .overrides
            .iter()
            .map(|(host, ips)| {
                let addrs = ips.iter().map(|ip| SocketAddr::new(*ip, 0)).collect();
                (Cow::Owned(host.clone()), addrs)
            })
            .collect();

        Arc::new(DnsResolverWithOverrides::new(inner, overrides))
    }
}

fn parse_override(entry: &str) -> Result<(&str, IpAddr), ConfigError> {
    let invalid = || ConfigError::InvalidOverride(entry.to_owned());

    let (host, ip) = entry.split_once('=').ok_or_else(invalid)?;
    let host = host.trim();
    if host.is_empty() {
        return Err(invalid());
    }
    let ip = ip.trim().parse::<IpAddr>().map_err(|_| invalid())?;
    Ok((host, ip))
}
