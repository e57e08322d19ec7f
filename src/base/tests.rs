use crate::base::neterror::NetError;
use std::io;
use std::net::{IpAddr, Ipv4Addr};

#[test]
fn test_error_codes() {
    let forward = NetError::dns_failed("nowhere.invalid", io::Error::other("timed out"));
    assert_eq!(forward.as_i32(), -105);

    let reverse = NetError::reverse_failed(
        IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)),
        io::Error::other("no PTR record"),
    );
    assert_eq!(reverse.as_i32(), -137);
}

#[test]
fn test_display_includes_domain_and_cause() {
    let err = NetError::dns_failed(
        "nowhere.invalid",
        io::Error::new(io::ErrorKind::NotFound, "Name or service not known"),
    );
    assert_eq!(err.to_string(), "nowhere.invalid: Name or service not known");

    // Clone keeps the shared source
    let cloned = err.clone();
    assert_eq!(cloned.to_string(), err.to_string());
}
