//! Byte packing for the canonical 16-byte address buffer.
//!
//! IPv4 values are packed behind the IPv4-mapped prefix `::ffff:0:0/96`;
//! IPv6 values are packed from their 32-digit hex form.

use crate::error::AddrError;

/// The first 12 bytes of every IPv4-mapped IPv6 address.
pub const MAPPED_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

/// Pack four IPv4 octets into the mapped 16-byte form.
pub fn pack_v4(octets: [u8; 4]) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    bytes[..12].copy_from_slice(&MAPPED_PREFIX);
    bytes[12..].copy_from_slice(&octets);
    bytes
}

/// Whether bytes 0..12 equal the IPv4-mapped prefix.
pub fn has_mapped_prefix(bytes: &[u8; 16]) -> bool {
    bytes[..12] == MAPPED_PREFIX
}

/// Parse a 32-digit hex string into a 16-byte buffer.
pub fn hex_to_bytes(hex_str: &str) -> Result<[u8; 16], AddrError> {
    if hex_str.len() != 32 {
        return Err(AddrError::format(format!(
            "expected 32 hex digits, got {}",
            hex_str.len()
        )));
    }

    let decoded = hex::decode(hex_str)?;

    let mut result = [0u8; 16];
    result.copy_from_slice(&decoded);
    Ok(result)
}

/// Render a 16-byte buffer as 32 lowercase hex digits.
pub fn bytes_to_hex(bytes: &[u8; 16]) -> String {
    hex::encode(bytes)
}

/// Pack eight 4-digit hextet strings (no separators) into a buffer.
pub fn pack_hextets<S: AsRef<str>>(hextets: &[S]) -> Result<[u8; 16], AddrError> {
    if hextets.len() != 8 {
        return Err(AddrError::format(format!(
            "expected 8 hextets, got {}",
            hextets.len()
        )));
    }

    let mut hex_string = String::with_capacity(32);
    for hextet in hextets {
        hex_string.push_str(hextet.as_ref());
    }

    hex_to_bytes(&hex_string)
}

/// Split a buffer into its eight big-endian 16-bit groups.
pub fn unpack_hextets(bytes: &[u8; 16]) -> [u16; 8] {
    let mut hextets = [0u16; 8];
    for (i, chunk) in bytes.chunks_exact(2).enumerate() {
        hextets[i] = u16::from_be_bytes([chunk[0], chunk[1]]);
    }
    hextets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_v4() {
        let bytes = pack_v4([192, 168, 2, 1]);
        assert!(has_mapped_prefix(&bytes));
        assert_eq!(&bytes[12..], &[192, 168, 2, 1]);
    }

    #[test]
    fn test_mapped_prefix_detection() {
        assert!(!has_mapped_prefix(&[0u8; 16]));

        let mut bytes = pack_v4([0, 0, 0, 0]);
        assert!(has_mapped_prefix(&bytes));

        bytes[0] = 0x01;
        assert!(!has_mapped_prefix(&bytes));

        bytes[0] = 0;
        bytes[5] = 0x01;
        assert!(!has_mapped_prefix(&bytes));
    }

    #[test]
    fn test_hex_to_bytes() {
        let bytes = hex_to_bytes("2607f8b040090805000000000000200e").unwrap();
        assert_eq!(bytes[0], 0x26);
        assert_eq!(bytes[15], 0x0e);
        assert_eq!(bytes_to_hex(&bytes), "2607f8b040090805000000000000200e");
    }

    #[test]
    fn test_hex_to_bytes_rejects_bad_input() {
        assert!(matches!(hex_to_bytes("abcd"), Err(AddrError::Format(_))));
        assert!(matches!(
            hex_to_bytes("zz07f8b040090805000000000000200e"),
            Err(AddrError::Format(_))
        ));
    }

    #[test]
    fn test_pack_hextets() {
        let hextets = ["fe80", "0000", "0000", "0000", "0000", "0000", "0000", "0001"];
        let bytes = pack_hextets(&hextets).unwrap();
        assert_eq!(unpack_hextets(&bytes), [0xfe80, 0, 0, 0, 0, 0, 0, 1]);

        assert!(pack_hextets(&hextets[..7]).is_err());
    }
}
