//! Host and port handling.
//!
//! A small helper that separates a host (dotted IPv4 or bracketed IPv6,
//! optionally with a zone) from a trailing `:port`.

pub mod splitter;

pub use splitter::{parse_host_port, split_host_port};
