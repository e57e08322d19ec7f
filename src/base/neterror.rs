use std::{io, net::IpAddr, sync::Arc};
use thiserror::Error;

/// Resolution errors, numbered after Chromium's `net_error_list.h`.
///
/// Both variants keep the underlying `io::Error` behind an `Arc` so the
/// error stays `Clone`.
#[derive(Debug, Error, Clone)]
pub enum NetError {
    #[error("{domain}: {source}")]
    NameNotResolvedFor {
        domain: String,
        source: Arc<io::Error>,
    },
    #[error("{address}: {source}")]
    AddressNotResolvedFor {
        address: IpAddr,
        source: Arc<io::Error>,
    },
}

impl NetError {
    /// Chromium code: `ERR_NAME_NOT_RESOLVED` (-105) or
    /// `ERR_NAME_RESOLUTION_FAILED` (-137).
    pub fn as_i32(&self) -> i32 {
        match self {
            NetError::NameNotResolvedFor { .. } => -105,
            NetError::AddressNotResolvedFor { .. } => -137,
        }
    }

    /// Create a forward resolution error for `domain`.
    pub fn dns_failed(domain: impl Into<String>, source: io::Error) -> Self {
        NetError::NameNotResolvedFor {
            domain: domain.into(),
            source: Arc::new(source),
        }
    }

    /// Create a reverse resolution error for `address`.
    pub fn reverse_failed(address: IpAddr, source: io::Error) -> Self {
        NetError::AddressNotResolvedFor {
            address,
            source: Arc::new(source),
        }
    }
}
