//! Base types and error handling.
//!
//! - [`neterror::NetError`]: resolution errors, coded as in Chromium's `net_error_list.h`
//! - [`context::IoResultExt`]: attaches domain/address context to IO errors

pub mod context;
pub mod neterror;

#[cfg(test)]
mod tests;
