//! Text to [`Address`] conversion.
//!
//! Accepts dotted-quad IPv4, RFC 4291 IPv6 text (including one `::`
//! elision and a trailing embedded dotted quad), RFC 6874 `%zone` suffixes,
//! and a single enclosing pair of brackets.

use tracing::{debug, trace};

use crate::core::packer::{has_mapped_prefix, pack_hextets};
use crate::error::AddrError;
use crate::types::Address;

/// Parse an IPv4 or IPv6 address from text.
///
/// # Examples
///
/// ```
/// use ipcodec::parse;
///
/// let v4 = parse("192.168.2.1")?;
/// assert!(v4.is_v4());
///
/// let v6 = parse("[fe80::1%eth0]")?;
/// assert_eq!(v6.zone(), Some("eth0"));
/// # Ok::<(), ipcodec::AddrError>(())
/// ```
pub fn parse(text: &str) -> Result<Address, AddrError> {
    match parse_address(text) {
        Ok(addr) => {
            trace!(input = text, is_v4 = addr.is_v4(), "parsed address");
            Ok(addr)
        }
        Err(err) => {
            debug!(input = text, error = %err, "rejected address");
            Err(err)
        }
    }
}

fn parse_address(text: &str) -> Result<Address, AddrError> {
    let addr = strip_brackets(text)?;

    if addr == "::" {
        return Ok(Address::unspecified());
    }

    if addr.contains(':') {
        parse_v6(addr)
    } else if addr.contains('.') {
        Ok(Address::v4(parse_v4(addr)?))
    } else {
        Err(AddrError::format("not a valid IP address"))
    }
}

/// Remove one enclosing `[` `]` pair. Brackets anywhere else are rejected.
fn strip_brackets(text: &str) -> Result<&str, AddrError> {
    let inner = match text.strip_prefix('[') {
        Some(rest) => rest
            .strip_suffix(']')
            .ok_or_else(|| AddrError::format("unbalanced brackets"))?,
        None => text,
    };

    if inner.contains(|c: char| c == '[' || c == ']') {
        return Err(AddrError::format("unexpected bracket"));
    }

    Ok(inner)
}

/// Parse exactly four dot-separated decimal octets.
pub fn parse_v4(text: &str) -> Result<[u8; 4], AddrError> {
    let mut octets = [0u8; 4];
    let mut count = 0;

    for part in text.split('.') {
        if count == 4 {
            return Err(AddrError::format("IPv4 address has more than 4 octets"));
        }
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AddrError::format(format!("invalid IPv4 octet: '{}'", part)));
        }
        octets[count] = part
            .parse::<u8>()
            .map_err(|_| AddrError::format(format!("IPv4 octet out of range: {}", part)))?;
        count += 1;
    }

    if count != 4 {
        return Err(AddrError::format("IPv4 address has fewer than 4 octets"));
    }

    Ok(octets)
}

fn parse_v6(text: &str) -> Result<Address, AddrError> {
    let (addr, zone) = split_zone(text)?;

    let hextets = expand(addr)?;
    let bytes = pack_hextets(&hextets)?;
    let is_v4 = has_mapped_prefix(&bytes);

    if is_v4 && zone.is_some() {
        return Err(AddrError::format("zone not permitted on IPv4-mapped address"));
    }

    Ok(Address::from_parts(bytes, is_v4, zone.map(str::to_string)))
}

fn split_zone(text: &str) -> Result<(&str, Option<&str>), AddrError> {
    let mut parts = text.splitn(3, '%');
    let addr = parts.next().unwrap_or_default();
    let zone = parts.next();

    if parts.next().is_some() {
        return Err(AddrError::format("multiple zone delimiters"));
    }
    if zone == Some("") {
        return Err(AddrError::format("empty zone"));
    }

    Ok((addr, zone))
}

/// Expand IPv6 text (without zone) into eight zero-padded 4-digit hextets.
///
/// ```
/// use ipcodec::expand;
///
/// let hextets = expand("fe80::1")?;
/// assert_eq!(hextets, ["fe80", "0000", "0000", "0000", "0000", "0000", "0000", "0001"]);
/// # Ok::<(), ipcodec::AddrError>(())
/// ```
pub fn expand(addr: &str) -> Result<Vec<String>, AddrError> {
    let hextets = match addr.split_once("::") {
        Some((head, tail)) => {
            if tail.contains("::") {
                return Err(AddrError::format("multiple '::' elisions"));
            }

            let head = groups(head, false)?;
            let tail = groups(tail, true)?;

            let explicit = head.len() + tail.len();
            if explicit > 7 {
                return Err(AddrError::format("too many hextets around '::'"));
            }

            let mut hextets = head;
            hextets.extend(std::iter::repeat("0000".to_string()).take(8 - explicit));
            hextets.extend(tail);
            hextets
        }
        None => {
            let hextets = groups(addr, true)?;
            if hextets.len() != 8 {
                return Err(AddrError::format(format!(
                    "expected 8 hextets, got {}",
                    hextets.len()
                )));
            }
            hextets
        }
    };

    Ok(hextets)
}

/// Normalize colon-separated groups. A trailing dotted quad becomes two hextets.
fn groups(text: &str, allow_dotted_tail: bool) -> Result<Vec<String>, AddrError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let parts: Vec<&str> = text.split(':').collect();
    let last = parts.len() - 1;
    let mut hextets = Vec::with_capacity(parts.len() + 1);

    for (i, part) in parts.into_iter().enumerate() {
        if part.contains('.') {
            if !allow_dotted_tail || i != last {
                return Err(AddrError::format("embedded IPv4 must be the final group"));
            }
            let o = parse_v4(part)?;
            hextets.push(format!("{:02x}{:02x}", o[0], o[1]));
            hextets.push(format!("{:02x}{:02x}", o[2], o[3]));
        } else {
            hextets.push(pad_hextet(part)?);
        }
    }

    Ok(hextets)
}

fn pad_hextet(part: &str) -> Result<String, AddrError> {
    if part.is_empty() || part.len() > 4 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddrError::format(format!("invalid hextet: '{}'", part)));
    }
    Ok(format!("{:0>4}", part.to_ascii_lowercase()))
}
