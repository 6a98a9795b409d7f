//! [`Address`] to text conversion.

use tracing::trace;

use crate::types::{Address, FormatStyle};

/// Render an address as text in the given style.
///
/// # Examples
///
/// ```
/// use ipcodec::{format, parse, FormatStyle};
///
/// let addr = parse("2607:f8b0:4009:805:0:0:0:200e")?;
/// assert_eq!(format(&addr, FormatStyle::Default), "2607:f8b0:4009:805::200e");
/// assert_eq!(format(&addr, FormatStyle::Expanded), "2607:f8b0:4009:805:0:0:0:200e");
///
/// let v4 = parse("192.168.2.1")?;
/// assert_eq!(format(&v4, FormatStyle::Mapped), "0:0:0:0:0:ffff:c0a8:201");
/// # Ok::<(), ipcodec::AddrError>(())
/// ```
pub fn format(addr: &Address, style: FormatStyle) -> String {
    let text = if addr.is_v4() {
        match style {
            FormatStyle::Mapped => join_hextets(&addr.hextets()),
            FormatStyle::Default | FormatStyle::Expanded => format_v4(addr.v4_octets()),
        }
    } else {
        let hextets = addr.hextets();
        let mut text = match style {
            FormatStyle::Expanded => join_hextets(&hextets),
            FormatStyle::Default | FormatStyle::Mapped => compress(&hextets),
        };
        if let Some(zone) = addr.zone() {
            text.push('%');
            text.push_str(zone);
        }
        text
    };

    trace!(?style, output = %text, "formatted address");
    text
}

/// Dotted-decimal rendering of four octets.
pub fn format_v4(octets: [u8; 4]) -> String {
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

/// All eight hextets, lowercase without leading zeros.
pub fn join_hextets(hextets: &[u16]) -> String {
    hextets
        .iter()
        .map(|h| format!("{:x}", h))
        .collect::<Vec<_>>()
        .join(":")
}

/// Compressed rendering: the longest run of two or more zero hextets
/// (leftmost on ties) is replaced by `::`.
pub fn compress(hextets: &[u16; 8]) -> String {
    match longest_zero_run(hextets) {
        Some((start, len)) => format!(
            "{}::{}",
            join_hextets(&hextets[..start]),
            join_hextets(&hextets[start + len..])
        ),
        None => join_hextets(hextets),
    }
}

/// Start and length of the longest run of zero hextets with length >= 2.
fn longest_zero_run(hextets: &[u16; 8]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;

    while i < hextets.len() {
        if hextets[i] != 0 {
            i += 1;
            continue;
        }

        let start = i;
        while i < hextets.len() && hextets[i] == 0 {
            i += 1;
        }
        let len = i - start;

        if len >= 2 && best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress() {
        let test_cases = vec![
            ([0u16; 8], "::"),
            ([0, 0, 0, 0, 0, 0, 0, 1], "::1"),
            ([1, 0, 0, 0, 0, 0, 0, 0], "1::"),
            ([0xfe80, 0, 0, 0, 0, 0, 0, 1], "fe80::1"),
            ([0x2607, 0xf8b0, 0x4009, 0x805, 0, 0, 0, 0x200e], "2607:f8b0:4009:805::200e"),
            ([1, 2, 3, 4, 5, 6, 7, 8], "1:2:3:4:5:6:7:8"),
        ];

        for (hextets, expected) in test_cases {
            assert_eq!(compress(&hextets), expected);
        }
    }

    #[test]
    fn test_compress_ignores_single_zero() {
        assert_eq!(compress(&[1, 0, 2, 3, 4, 5, 6, 7]), "1:0:2:3:4:5:6:7");
    }

    #[test]
    fn test_compress_prefers_longest_then_leftmost() {
        assert_eq!(compress(&[1, 0, 0, 2, 0, 0, 0, 3]), "1:0:0:2::3");
        assert_eq!(compress(&[1, 0, 0, 2, 3, 0, 0, 4]), "1::2:3:0:0:4");
        assert_eq!(compress(&[0, 0, 1, 2, 3, 4, 0, 0]), "::1:2:3:4:0:0");
    }

    #[test]
    fn test_join_hextets_drops_leading_zeros() {
        assert_eq!(join_hextets(&[0x0001, 0x00ab, 0x0c00, 0xffff]), "1:ab:c00:ffff");
    }

    #[test]
    fn test_format_v4() {
        assert_eq!(format_v4([10, 0, 0, 1]), "10.0.0.1");
    }
}
