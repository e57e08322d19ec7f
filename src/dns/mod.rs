//! DNS Resolution Module
//!
//! Provides pluggable DNS resolution with support for:
//! - System resolver (getaddrinfo/getnameinfo via thread pool)
//! - Async hickory-dns resolver
//! - Hostname-to-IP override mechanism
//!
//! # Architecture
//!
//! The `Resolve` trait is the core abstraction that allows different
//! resolver implementations to be used interchangeably. The [`lookup`]
//! functions apply the interactive tool's input rules on top of it.
//!
//! # Example
//!
//! ```rust,ignore
//! use dnslookup::dns::{forward_lookup, GaiResolver};
//!
//! let resolver = GaiResolver::new();
//! let ip = forward_lookup(&resolver, "example.com").await?;
//! println!("Resolved: {}", ip);
//! ```

mod gai;
mod hickory;
pub mod lookup;
mod resolve;

pub use gai::GaiResolver;
pub use hickory::HickoryResolver;
pub use lookup::{forward_lookup, reverse_lookup};
pub use resolve::{
    Addrs, DnsResolverWithOverrides, Name, Resolve, ReverseResolving, Resolving,
};
