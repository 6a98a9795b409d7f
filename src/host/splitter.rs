//! Splitting of `host:port` strings.

use tracing::debug;

use crate::core::parser::parse;
use crate::error::AddrError;
use crate::types::Address;

const SPLIT_ERROR: &str = "cannot split IP address and port from host";

/// Split `host:port` into its host text and port.
///
/// Two shapes are recognized: a bracketed IPv6 host (optionally with a zone)
/// followed by an optional `:port`, and a dotted IPv4 host followed by an
/// optional `:port`. A missing port is returned as `0`. The host part is
/// returned verbatim, brackets included.
///
/// # Examples
///
/// ```
/// use ipcodec::split_host_port;
///
/// assert_eq!(split_host_port("192.168.2.1:9999")?, ("192.168.2.1".to_string(), 9999));
/// assert_eq!(split_host_port("[fe80::1%eth1]:80")?, ("[fe80::1%eth1]".to_string(), 80));
/// assert!(split_host_port("2607:f8b0:4009:805::200e:9999").is_err());
/// # Ok::<(), ipcodec::AddrError>(())
/// ```
pub fn split_host_port(text: &str) -> Result<(String, u16), AddrError> {
    let result = if text.starts_with('[') {
        split_bracketed(text)
    } else if text.contains('.') {
        split_dotted(text)
    } else {
        Err(AddrError::format(SPLIT_ERROR))
    };

    if let Err(err) = &result {
        debug!(input = text, error = %err, "rejected host:port");
    }
    result
}

/// Split `host:port` and parse the host as an [`Address`].
pub fn parse_host_port(text: &str) -> Result<(Address, u16), AddrError> {
    let (host, port) = split_host_port(text)?;
    Ok((parse(&host)?, port))
}

fn split_dotted(text: &str) -> Result<(String, u16), AddrError> {
    let parts: Vec<&str> = text.split(':').collect();
    match parts.as_slice() {
        [host] => Ok((host.to_string(), 0)),
        [host, port] => Ok((host.to_string(), parse_port(port)?)),
        _ => Err(AddrError::format(SPLIT_ERROR)),
    }
}

fn split_bracketed(text: &str) -> Result<(String, u16), AddrError> {
    let close = text.find(']').ok_or_else(|| AddrError::format(SPLIT_ERROR))?;
    let (host, rest) = text.split_at(close + 1);

    let port = if rest.is_empty() {
        0
    } else {
        match rest.strip_prefix(':') {
            Some("") => 0,
            Some(port) => parse_port(port)?,
            None => return Err(AddrError::format(SPLIT_ERROR)),
        }
    };

    Ok((host.to_string(), port))
}

fn parse_port(port: &str) -> Result<u16, AddrError> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddrError::format(format!("invalid port: '{}'", port)));
    }
    port.parse::<u16>()
        .map_err(|_| AddrError::format(format!("port out of range: {}", port)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_dotted() {
        assert_eq!(split_dotted("10.0.0.1:80").unwrap(), ("10.0.0.1".to_string(), 80));
        assert_eq!(split_dotted("10.0.0.1").unwrap(), ("10.0.0.1".to_string(), 0));
        assert!(split_dotted("10.0.0.1:80:90").is_err());
        assert!(split_dotted("10.0.0.1:").is_err());
    }

    #[test]
    fn test_split_bracketed() {
        assert_eq!(split_bracketed("[::1]").unwrap(), ("[::1]".to_string(), 0));
        assert_eq!(split_bracketed("[::1]:").unwrap(), ("[::1]".to_string(), 0));
        assert_eq!(split_bracketed("[::1]:443").unwrap(), ("[::1]".to_string(), 443));
        assert!(split_bracketed("[::1]443").is_err());
        assert!(split_bracketed("[::1").is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("0").unwrap(), 0);
        assert_eq!(parse_port("65535").unwrap(), 65535);
        assert!(parse_port("65536").is_err());
        assert!(parse_port("http").is_err());
        assert!(parse_port("+80").is_err());
        assert!(parse_port("-1").is_err());
    }

    #[test]
    fn test_bracketed_v4_mapped_host() {
        let (host, port) = split_host_port("[::ffff:1.2.3.4]:8080").unwrap();
        assert_eq!(host, "[::ffff:1.2.3.4]");
        assert_eq!(port, 8080);
    }
}
