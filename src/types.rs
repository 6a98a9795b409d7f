//! Core data structures for address parsing and formatting.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::core::packer::{has_mapped_prefix, pack_v4, unpack_hextets};
use crate::error::AddrError;

/// A parsed IPv4 or IPv6 address in canonical 16-byte form.
///
/// IPv4 addresses are always stored in the IPv4-mapped IPv6 form
/// (`::ffff:a.b.c.d`), so the buffer is 16 octets for both families.
/// The zone is only ever set on IPv6 values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    bytes: [u8; 16],
    is_v4: bool,
    zone: Option<String>,
}

impl Address {
    /// The unspecified IPv6 address `::`.
    pub fn unspecified() -> Self {
        Self {
            bytes: [0u8; 16],
            is_v4: false,
            zone: None,
        }
    }

    /// Build an IPv4 address from its four octets.
    pub fn v4(octets: [u8; 4]) -> Self {
        Self {
            bytes: pack_v4(octets),
            is_v4: true,
            zone: None,
        }
    }

    /// Build an IPv6 address from raw bytes.
    ///
    /// A buffer carrying the mapped prefix `::ffff:0:0/96` is treated as IPv4,
    /// the same way a parsed mapped literal is.
    pub fn v6(bytes: [u8; 16]) -> Self {
        Self {
            bytes,
            is_v4: has_mapped_prefix(&bytes),
            zone: None,
        }
    }

    pub(crate) fn from_parts(bytes: [u8; 16], is_v4: bool, zone: Option<String>) -> Self {
        debug_assert!(!is_v4 || has_mapped_prefix(&bytes));
        debug_assert!(!is_v4 || zone.is_none());
        Self { bytes, is_v4, zone }
    }

    /// Raw 16-byte buffer in network byte order.
    pub fn bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Copy of the raw buffer.
    pub fn octets(&self) -> [u8; 16] {
        self.bytes
    }

    /// Whether this value represents an IPv4 address.
    pub fn is_v4(&self) -> bool {
        self.is_v4
    }

    /// RFC 6874 zone identifier, if one was given.
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// The eight 16-bit groups of the buffer.
    pub fn hextets(&self) -> [u16; 8] {
        unpack_hextets(&self.bytes)
    }

    /// Whether every byte of the buffer is zero.
    pub fn is_unspecified(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// The four IPv4 octets (bytes 12..16).
    pub fn v4_octets(&self) -> [u8; 4] {
        [self.bytes[12], self.bytes[13], self.bytes[14], self.bytes[15]]
    }

    /// Convert to a `std::net::IpAddr`. The zone is dropped.
    pub fn to_ip_addr(&self) -> IpAddr {
        if self.is_v4 {
            IpAddr::V4(Ipv4Addr::from(self.v4_octets()))
        } else {
            IpAddr::V6(Ipv6Addr::from(self.bytes))
        }
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::unspecified()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::core::formatter::format(self, FormatStyle::Default))
    }
}

impl FromStr for Address {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::parser::parse(s)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address::v4(addr.octets())
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Address::v6(addr.octets())
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<&Address> for IpAddr {
    fn from(addr: &Address) -> Self {
        addr.to_ip_addr()
    }
}

/// Text rendering conventions for [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatStyle {
    /// Dotted decimal for IPv4, compressed hextets for IPv6.
    #[default]
    Default,
    /// IPv4 rendered as its full IPv4-mapped IPv6 text. No effect on IPv6.
    Mapped,
    /// IPv6 rendered with all eight hextets. No effect on IPv4.
    Expanded,
}

impl FromStr for FormatStyle {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(FormatStyle::Default),
            "mapped" => Ok(FormatStyle::Mapped),
            "expanded" => Ok(FormatStyle::Expanded),
            other => Err(AddrError::format(format!("unknown format style: {}", other))),
        }
    }
}
