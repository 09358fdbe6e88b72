//! Account address and object identifier type.
//!
//! Provides `SuiAddress`, a 32-byte value displayed as `0x`-prefixed,
//! zero-padded lowercase hex. Object ids share the same representation,
//! so `ObjectId` is an alias.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bcs::BcsWriter;
use crate::TypesError;

/// Size of an address in bytes.
pub const ADDRESS_LENGTH: usize = 32;

/// Maximum hex digits in an address string (excluding `0x`).
pub const MAX_ADDRESS_HEX_LENGTH: usize = ADDRESS_LENGTH * 2;

/// Address of the Move standard library package (`0x1`).
pub const MOVE_STDLIB_ADDRESS: SuiAddress = SuiAddress::from_u8(1);

/// Address of the Sui framework package (`0x2`).
pub const SUI_FRAMEWORK_ADDRESS: SuiAddress = SuiAddress::from_u8(2);

/// A 32-byte Sui account address or package address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct SuiAddress([u8; ADDRESS_LENGTH]);

/// Object identifiers use the same 32-byte form as addresses.
pub type ObjectId = SuiAddress;

impl SuiAddress {
    /// The all-zero address.
    pub const ZERO: SuiAddress = SuiAddress([0u8; ADDRESS_LENGTH]);

    /// Create an address from a raw 32-byte array.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        SuiAddress(bytes)
    }

    /// Build a well-known short address such as `0x1` or `0x2`.
    const fn from_u8(last: u8) -> Self {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[ADDRESS_LENGTH - 1] = last;
        SuiAddress(bytes)
    }

    /// Create an address from a byte slice.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(SuiAddress)` if the slice is 32 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypesError> {
        if bytes.len() != ADDRESS_LENGTH {
            return Err(TypesError::InvalidLength {
                expected: ADDRESS_LENGTH,
                got: bytes.len(),
            });
        }
        let mut arr = [0u8; ADDRESS_LENGTH];
        arr.copy_from_slice(bytes);
        Ok(SuiAddress(arr))
    }

    /// Parse an address from hex, with or without a `0x` prefix.
    ///
    /// Short forms are zero-padded on the high end, so `"0x2"` is the
    /// framework address.
    ///
    /// # Arguments
    /// * `hex_str` - Between 1 and 64 hex digits, optionally prefixed.
    ///
    /// # Returns
    /// `Ok(SuiAddress)` on success, or an error for empty, oversized, or
    /// non-hex input.
    pub fn from_hex(hex_str: &str) -> Result<Self, TypesError> {
        let digits = hex_str
            .strip_prefix("0x")
            .or_else(|| hex_str.strip_prefix("0X"))
            .unwrap_or(hex_str);
        if digits.is_empty() {
            return Err(TypesError::InvalidAddress(format!(
                "{:?} has no hex digits",
                hex_str
            )));
        }
        if digits.len() > MAX_ADDRESS_HEX_LENGTH {
            return Err(TypesError::InvalidAddress(format!(
                "{:?} is longer than {} hex digits",
                hex_str, MAX_ADDRESS_HEX_LENGTH
            )));
        }

        let padded = format!("{:0>width$}", digits, width = MAX_ADDRESS_HEX_LENGTH);
        let decoded = hex::decode(&padded)?;
        Self::from_bytes(&decoded)
    }

    /// Return the full `0x` + 64 hex digit form.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Return the shortest `0x` form with leading zeros stripped
    /// (`0x2` rather than `0x000...02`).
    pub fn to_short_hex(&self) -> String {
        let full = hex::encode(self.0);
        let trimmed = full.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{}", trimmed)
        }
    }

    /// Access the internal byte array.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Append the BCS form (32 raw bytes, no length prefix).
    pub fn write_to(&self, writer: &mut BcsWriter) {
        writer.write_bytes(&self.0);
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for SuiAddress {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SuiAddress::from_hex(s)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for SuiAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        SuiAddress(bytes)
    }
}

/// Serialize as the full hex string in JSON.
impl Serialize for SuiAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Deserialize from a hex string in JSON (short forms accepted).
impl<'de> Deserialize<'de> for SuiAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        SuiAddress::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form_is_left_padded() {
        let addr = SuiAddress::from_hex("0x2").unwrap();
        assert_eq!(addr, SUI_FRAMEWORK_ADDRESS);
        assert_eq!(
            addr.to_string(),
            "0x0000000000000000000000000000000000000000000000000000000000000002"
        );
        assert_eq!(addr.to_short_hex(), "0x2");
    }

    #[test]
    fn test_odd_length_and_no_prefix() {
        let a = SuiAddress::from_hex("abc").unwrap();
        let b = SuiAddress::from_hex("0xABC").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_bytes()[30], 0x0a);
        assert_eq!(a.as_bytes()[31], 0xbc);
    }

    #[test]
    fn test_full_length_roundtrip() {
        let s = "0x5f1b1a0e8e6b0d7e2c3a6f1e9d8c7b6a5f4e3d2c1b0a99887766554433221100";
        let addr: SuiAddress = s.parse().unwrap();
        assert_eq!(addr.to_hex(), s);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(SuiAddress::from_hex("").is_err());
        assert!(SuiAddress::from_hex("0x").is_err());
        assert!(SuiAddress::from_hex("0xzz").is_err());
        let too_long = format!("0x{}", "1".repeat(65));
        assert!(SuiAddress::from_hex(&too_long).is_err());
    }

    #[test]
    fn test_from_bytes_length_check() {
        assert!(SuiAddress::from_bytes(&[0u8; 31]).is_err());
        assert_eq!(SuiAddress::from_bytes(&[0u8; 32]).unwrap(), SuiAddress::ZERO);
        assert_eq!(SuiAddress::ZERO.to_short_hex(), "0x0");
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&MOVE_STDLIB_ADDRESS).unwrap();
        assert_eq!(
            json,
            "\"0x0000000000000000000000000000000000000000000000000000000000000001\""
        );
        let back: SuiAddress = serde_json::from_str("\"0x1\"").unwrap();
        assert_eq!(back, MOVE_STDLIB_ADDRESS);
    }
}
