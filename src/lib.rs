//! # dnslookup
//!
//! Interactive forward and reverse DNS lookups through the host resolver.
//!
//! The `dnslookup` binary shows a three-entry menu, resolves a domain to an
//! address or an address to a domain, prints the answer (or why there is
//! none) and asks again until the user picks Exit.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dnslookup::console::IoConsole;
//! use dnslookup::dns::GaiResolver;
//! use dnslookup::menu::Menu;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> std::io::Result<()> {
//!     let mut menu = Menu::new(IoConsole::stdio(), GaiResolver::new());
//!     menu.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`config`] - Resolver selection and overrides from the environment
//! - [`console`] - Line-oriented console I/O
//! - [`dns`] - Resolver trait, backends and user-facing lookups
//! - [`menu`] - The interactive menu loop

pub mod base;
pub mod config;
pub mod console;
pub mod dns;
pub mod menu;
