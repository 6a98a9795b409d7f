//! Tests for host:port splitting.

use ipcodec::*;

#[test]
fn test_split_host_port_scenarios() {
    let test_cases = vec![
        ("192.168.2.1:9999", "192.168.2.1", 9999),
        ("192.168.2.1", "192.168.2.1", 0),
        ("[2607:f8b0:4009:805::200e]:9999", "[2607:f8b0:4009:805::200e]", 9999),
        ("[2607:f8b0:4009:805::200e%eth1]:9999", "[2607:f8b0:4009:805::200e%eth1]", 9999),
        ("[2607:f8b0:4009:805::200e]", "[2607:f8b0:4009:805::200e]", 0),
        ("[::1]:", "[::1]", 0),
    ];

    for (input, host, port) in test_cases {
        let result = split_host_port(input).unwrap();
        assert_eq!(result, (host.to_string(), port), "Split failed for: {}", input);
    }
}

#[test]
fn test_split_host_port_unbracketed_v6() {
    let result = split_host_port("2607:f8b0:4009:805::200e:9999");
    assert_eq!(
        result,
        Err(AddrError::Format("cannot split IP address and port from host".to_string()))
    );
}

#[test]
fn test_split_host_port_bad_ports() {
    let invalid = vec![
        "192.168.2.1:http",
        "192.168.2.1:65536",
        "192.168.2.1:-1",
        "192.168.2.1:",
        "192.168.2.1:80:90",
        "[::1]:http",
        "[::1]:99999",
        "[::1]80",
    ];

    for input in invalid {
        assert!(
            matches!(split_host_port(input), Err(AddrError::Format(_))),
            "Should reject: {}",
            input
        );
    }
}

#[test]
fn test_split_host_port_unrecognized() {
    for input in ["", "localhost", "localhost:80", "[::1"] {
        assert!(split_host_port(input).is_err(), "Should reject: {}", input);
    }
}

#[test]
fn test_parse_host_port() {
    let (addr, port) = parse_host_port("[fe80::1%eth1]:443").unwrap();
    assert_eq!(addr.zone(), Some("eth1"));
    assert_eq!(addr.to_string(), "fe80::1%eth1");
    assert_eq!(port, 443);

    let (v4, port) = parse_host_port("10.0.0.1:8080").unwrap();
    assert!(v4.is_v4());
    assert_eq!(port, 8080);

    assert!(parse_host_port("999.0.0.1:80").is_err());
}
