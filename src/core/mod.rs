//! Core address codec.
//!
//! This module contains the address conversions:
//! - Parsing text into the canonical 16-byte form
//! - Formatting the 16-byte form back into text
//! - Conversion to and from the numeric value
//! - Byte packing of the 16-byte buffer

pub mod parser;
pub mod formatter;
pub mod decimal;
pub mod packer;

// Re-export main functionality
pub use parser::{parse, parse_v4, expand};
pub use formatter::{format, format_v4, compress, join_hextets};
pub use decimal::{to_decimal, from_decimal, DecimalValue};
pub use packer::{pack_v4, pack_hextets, hex_to_bytes, bytes_to_hex, has_mapped_prefix, MAPPED_PREFIX};
