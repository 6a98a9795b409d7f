//! Conversion between addresses and their unsigned integer value.

use tracing::debug;

use crate::error::AddrError;
use crate::types::Address;

/// A value that can be read as an unsigned 128-bit address number.
///
/// Implemented for the unsigned machine integers and for decimal strings,
/// which may carry arbitrarily many digits and are range checked.
pub trait DecimalValue {
    /// The value as `u128`, or an error when it cannot be represented.
    fn to_u128(&self) -> Result<u128, AddrError>;
}

macro_rules! impl_decimal_value {
    ($($t:ty),*) => {
        $(
            impl DecimalValue for $t {
                fn to_u128(&self) -> Result<u128, AddrError> {
                    Ok(*self as u128)
                }
            }
        )*
    };
}

impl_decimal_value!(u8, u16, u32, u64, u128, usize);

impl DecimalValue for &str {
    fn to_u128(&self) -> Result<u128, AddrError> {
        if self.is_empty() || !self.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AddrError::format(format!("not a decimal number: '{}'", self)));
        }

        let mut value: u128 = 0;
        for digit in self.bytes().map(|b| u128::from(b - b'0')) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| AddrError::range(format!("{} exceeds 128 bits", self)))?;
        }
        Ok(value)
    }
}

impl DecimalValue for String {
    fn to_u128(&self) -> Result<u128, AddrError> {
        self.as_str().to_u128()
    }
}

/// Numeric value of an address.
///
/// IPv4 values use only the last four bytes; IPv6 values (IPv4-mapped
/// included) use all sixteen.
pub fn to_decimal(addr: &Address) -> u128 {
    if addr.is_v4() {
        u128::from(u32::from_be_bytes(addr.v4_octets()))
    } else {
        u128::from_be_bytes(addr.octets())
    }
}

/// Build an address from its numeric value.
///
/// Values whose top 96 bits are zero become IPv4 addresses unless
/// `force_v6` is set. A value inside `::ffff:0:0/96` stays IPv6 here so
/// that [`to_decimal`] returns it unchanged, even though parsing its text
/// form yields the IPv4 address.
///
/// # Examples
///
/// ```
/// use ipcodec::from_decimal;
///
/// let v4 = from_decimal(3232236033u32, false)?;
/// assert_eq!(v4.to_string(), "192.168.2.1");
///
/// let v6 = from_decimal(1u8, true)?;
/// assert_eq!(v6.to_string(), "::1");
///
/// let mapped = from_decimal(0xffff_c0a8_0201u64, false)?;
/// assert!(!mapped.is_v4());
/// assert_eq!(mapped.to_string(), "::ffff:c0a8:201");
///
/// assert!(from_decimal("340282366920938463463374607431768211456", false).is_err());
/// # Ok::<(), ipcodec::AddrError>(())
/// ```
pub fn from_decimal<V: DecimalValue>(value: V, force_v6: bool) -> Result<Address, AddrError> {
    let number = value.to_u128().map_err(|err| {
        debug!(error = %err, "rejected decimal value");
        err
    })?;

    let bytes = number.to_be_bytes();

    if !force_v6 && bytes[..12].iter().all(|&b| b == 0) {
        Ok(Address::v4([bytes[12], bytes[13], bytes[14], bytes[15]]))
    } else {
        Ok(Address::from_parts(bytes, false, None))
    }
}

impl Address {
    /// Numeric value of this address. See [`to_decimal`].
    pub fn to_decimal(&self) -> u128 {
        to_decimal(self)
    }

    /// Build an address from its numeric value. See [`from_decimal`].
    pub fn from_decimal<V: DecimalValue>(value: V, force_v6: bool) -> Result<Self, AddrError> {
        from_decimal(value, force_v6)
    }
}
