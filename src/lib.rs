//! ipcodec - IPv4/IPv6 address parsing and formatting
//!
//! This crate converts textual IPv4 and IPv6 addresses into a canonical
//! fixed-size 16-byte form and renders that form back into text under
//! several conventions.
//!
//! # Features
//!
//! - **Canonical**: Every address is 16 bytes; IPv4 lives behind the mapped prefix `::ffff:0:0/96`
//! - **Zones**: RFC 6874 `%zone` suffixes are preserved on IPv6 values
//! - **Mapped detection**: IPv6 text carrying the mapped prefix parses as IPv4
//! - **Styles**: Compressed, expanded and IPv4-mapped renderings
//! - **Numeric**: Conversion to and from the 128-bit unsigned value
//!
//! # Quick Start
//!
//! ```
//! use ipcodec::{parse, format, from_decimal, split_host_port, FormatStyle};
//!
//! // Parse and format
//! let addr = parse("2607:f8b0:4009:805:0:0:0:200e")?;
//! assert_eq!(addr.to_string(), "2607:f8b0:4009:805::200e");
//!
//! // IPv4-mapped IPv6 text is recognized as IPv4
//! let mapped = parse("0:0:0:0:0:ffff:c0a8:201")?;
//! assert!(mapped.is_v4());
//! assert_eq!(format(&mapped, FormatStyle::Default), "192.168.2.1");
//!
//! // Numeric value
//! assert_eq!(mapped.to_decimal(), 3232236033);
//! assert_eq!(from_decimal(3232236033u32, false)?, mapped);
//!
//! // Host and port
//! let (host, port) = split_host_port("[fe80::1%eth0]:9999")?;
//! assert_eq!((host.as_str(), port), ("[fe80::1%eth0]", 9999));
//! # Ok::<(), ipcodec::AddrError>(())
//! ```
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, AddrError>`:
//!
//! - `AddrError::Format` for text that is not a well-formed address or `host:port`
//! - `AddrError::Range` for decimal values that do not fit in 128 bits

// Re-export main codec functions
pub use self::core::{parse, format, to_decimal, from_decimal, DecimalValue};

// Re-export lower-level helpers
pub use self::core::{expand, compress, parse_v4, format_v4, join_hextets};
pub use self::core::{pack_v4, pack_hextets, hex_to_bytes, bytes_to_hex, has_mapped_prefix, MAPPED_PREFIX};

// Re-export host/port utilities
pub use self::host::{split_host_port, parse_host_port};

// Re-export public types
pub use error::AddrError;
pub use types::{Address, FormatStyle};

// Module declarations
pub mod error;
pub mod types;
pub mod core;
pub mod host;
