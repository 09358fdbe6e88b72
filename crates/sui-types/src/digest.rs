//! Object digest type.
//!
//! A digest pins an exact object version's contents. It is 32 bytes and
//! travels as Base58 text in JSON and RPC payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bcs::BcsWriter;
use crate::TypesError;

/// Size of an object digest in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// A 32-byte object digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ObjectDigest([u8; DIGEST_LENGTH]);

impl ObjectDigest {
    /// Create a digest from a raw 32-byte array.
    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        ObjectDigest(bytes)
    }

    /// Parse a digest from its Base58 text form.
    ///
    /// # Returns
    /// `Ok(ObjectDigest)` on success, or an error for invalid Base58 or a
    /// decoded length other than 32.
    pub fn from_base58(s: &str) -> Result<Self, TypesError> {
        let decoded = bs58::decode(s)
            .with_alphabet(bs58::Alphabet::BITCOIN)
            .into_vec()
            .map_err(|e| TypesError::InvalidDigest(e.to_string()))?;
        if decoded.len() != DIGEST_LENGTH {
            return Err(TypesError::InvalidLength {
                expected: DIGEST_LENGTH,
                got: decoded.len(),
            });
        }
        let mut arr = [0u8; DIGEST_LENGTH];
        arr.copy_from_slice(&decoded);
        Ok(ObjectDigest(arr))
    }

    /// Return the Base58 text form.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
    }

    /// Access the internal byte array.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }

    /// Append the BCS form. Digests are length-prefixed byte vectors on
    /// the wire.
    pub fn write_to(&self, writer: &mut BcsWriter) {
        writer.write_byte_vec(&self.0);
    }
}

impl fmt::Display for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl FromStr for ObjectDigest {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectDigest::from_base58(s)
    }
}

impl Serialize for ObjectDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for ObjectDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ObjectDigest::from_base58(&s).map_err(serde::de::Error::custom)
    }
}
