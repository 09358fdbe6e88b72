//! Transaction inputs.
//!
//! Inputs are either pure values (BCS-encoded literals) or objects. Pure
//! values keep their declared Move type as a string and are only encoded
//! when the transaction is serialized; object inputs may stay unresolved
//! (a bare id) until something fills in the version and digest.

use serde::{Deserialize, Serialize};

use sui_types::bcs::BcsWriter;
use sui_types::{ObjectDigest, ObjectId, SuiAddress, TypeTag, MOVE_STDLIB_ADDRESS};

use crate::TransactionError;

// -----------------------------------------------------------------------
// Pure values
// -----------------------------------------------------------------------

/// A literal value passed to a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum PureValue {
    Bool(bool),
    /// An unsigned integer. Fits any of `u8`..`u256` when in range.
    Number(u64),
    Address(SuiAddress),
    /// UTF-8 text for `0x1::string::String`, `0x1::ascii::String` or
    /// `vector<u8>`.
    String(String),
    /// Elements of a `vector<T>` or the zero-or-one element of an
    /// `0x1::option::Option<T>`.
    Vector(Vec<PureValue>),
}

impl PureValue {
    /// Append the BCS encoding of this value read as type `ty`.
    ///
    /// # Returns
    /// `Ok(())` on success, or `TransactionError::TypeMismatch` if the value
    /// does not fit the type (wrong shape, out-of-range integer, non-ASCII
    /// text for an ASCII string, more than one element for an `Option`).
    pub fn write_as(&self, ty: &TypeTag, writer: &mut BcsWriter) -> Result<(), TransactionError> {
        match (self, ty) {
            (PureValue::Bool(b), TypeTag::Bool) => writer.write_bool(*b),
            (PureValue::Number(n), TypeTag::U8) => {
                writer.write_u8(u8::try_from(*n).map_err(|_| self.mismatch(ty))?)
            }
            (PureValue::Number(n), TypeTag::U16) => {
                writer.write_u16_le(u16::try_from(*n).map_err(|_| self.mismatch(ty))?)
            }
            (PureValue::Number(n), TypeTag::U32) => {
                writer.write_u32_le(u32::try_from(*n).map_err(|_| self.mismatch(ty))?)
            }
            (PureValue::Number(n), TypeTag::U64) => writer.write_u64_le(*n),
            (PureValue::Number(n), TypeTag::U128) => writer.write_u128_le(u128::from(*n)),
            (PureValue::Number(n), TypeTag::U256) => {
                writer.write_u128_le(u128::from(*n));
                writer.write_u128_le(0);
            }
            (PureValue::Address(a), TypeTag::Address) => a.write_to(writer),
            (PureValue::String(s), t) if t.is_byte_vector() => writer.write_str(s),
            (PureValue::String(s), TypeTag::Struct(tag))
                if tag.is(&MOVE_STDLIB_ADDRESS, "string", "String") =>
            {
                writer.write_str(s)
            }
            (PureValue::String(s), TypeTag::Struct(tag))
                if tag.is(&MOVE_STDLIB_ADDRESS, "ascii", "String") && s.is_ascii() =>
            {
                writer.write_str(s)
            }
            (PureValue::Vector(items), TypeTag::Vector(inner)) => {
                writer.write_len(items.len());
                for item in items {
                    item.write_as(inner, writer)?;
                }
            }
            (PureValue::Vector(items), TypeTag::Struct(tag))
                if tag.is(&MOVE_STDLIB_ADDRESS, "option", "Option")
                    && tag.type_params.len() == 1
                    && items.len() <= 1 =>
            {
                writer.write_len(items.len());
                for item in items {
                    item.write_as(&tag.type_params[0], writer)?;
                }
            }
            _ => return Err(self.mismatch(ty)),
        }
        Ok(())
    }

    fn mismatch(&self, ty: &TypeTag) -> TransactionError {
        TransactionError::TypeMismatch {
            expected: ty.to_string(),
            value: format!("{:?}", self),
        }
    }
}

impl From<bool> for PureValue {
    fn from(v: bool) -> Self {
        PureValue::Bool(v)
    }
}

impl From<u8> for PureValue {
    fn from(v: u8) -> Self {
        PureValue::Number(u64::from(v))
    }
}

impl From<u64> for PureValue {
    fn from(v: u64) -> Self {
        PureValue::Number(v)
    }
}

impl From<SuiAddress> for PureValue {
    fn from(v: SuiAddress) -> Self {
        PureValue::Address(v)
    }
}

impl From<&str> for PureValue {
    fn from(v: &str) -> Self {
        PureValue::String(v.to_string())
    }
}

impl From<String> for PureValue {
    fn from(v: String) -> Self {
        PureValue::String(v)
    }
}

impl<T: Into<PureValue>> From<Vec<T>> for PureValue {
    fn from(v: Vec<T>) -> Self {
        PureValue::Vector(v.into_iter().map(Into::into).collect())
    }
}

// -----------------------------------------------------------------------
// Object references
// -----------------------------------------------------------------------

/// A reference to a specific version of an owned or immutable object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRef {
    pub object_id: ObjectId,
    pub version: u64,
    pub digest: ObjectDigest,
}

/// A reference to a shared object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedObjectRef {
    pub object_id: ObjectId,
    /// Version at which the object became shared.
    pub initial_shared_version: u64,
    /// Whether the transaction takes the object by mutable reference.
    pub mutable: bool,
}

/// An object input, resolved or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectInput {
    /// Only the id is known; version and ownership come from the network.
    Unresolved {
        #[serde(rename = "objectId")]
        object_id: ObjectId,
    },
    ImmOrOwned(ObjectRef),
    Shared(SharedObjectRef),
}

impl ObjectInput {
    /// The id of the referenced object.
    pub fn object_id(&self) -> ObjectId {
        match self {
            ObjectInput::Unresolved { object_id } => *object_id,
            ObjectInput::ImmOrOwned(r) => r.object_id,
            ObjectInput::Shared(r) => r.object_id,
        }
    }

    /// Whether the version (or shared version) is known.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, ObjectInput::Unresolved { .. })
    }

    /// Append the BCS `ObjectArg` form.
    ///
    /// # Returns
    /// `Err(TransactionError::UnresolvedObject)` for a bare id.
    pub fn write_to(&self, writer: &mut BcsWriter) -> Result<(), TransactionError> {
        match self {
            ObjectInput::Unresolved { object_id } => {
                return Err(TransactionError::UnresolvedObject(object_id.to_hex()));
            }
            ObjectInput::ImmOrOwned(r) => {
                writer.write_uleb128(0);
                r.object_id.write_to(writer);
                writer.write_u64_le(r.version);
                r.digest.write_to(writer);
            }
            ObjectInput::Shared(r) => {
                writer.write_uleb128(1);
                r.object_id.write_to(writer);
                writer.write_u64_le(r.initial_shared_version);
                writer.write_bool(r.mutable);
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------
// TransactionInput
// -----------------------------------------------------------------------

/// One entry of a transaction's input list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionInput {
    /// A literal value together with the Move type it is declared as.
    Pure {
        value: PureValue,
        #[serde(rename = "type")]
        type_tag: String,
    },
    Object(ObjectInput),
}

impl TransactionInput {
    /// Append the BCS `CallArg` form.
    ///
    /// Pure values are encoded here, against their declared type, and
    /// written as a length-prefixed byte vector.
    pub fn write_to(&self, writer: &mut BcsWriter) -> Result<(), TransactionError> {
        match self {
            TransactionInput::Pure { value, type_tag } => {
                let ty = TypeTag::parse(type_tag)?;
                let mut inner = BcsWriter::new();
                value.write_as(&ty, &mut inner)?;
                writer.write_uleb128(0);
                writer.write_byte_vec(&inner.into_bytes());
            }
            TransactionInput::Object(object) => {
                writer.write_uleb128(1);
                object.write_to(writer)?;
            }
        }
        Ok(())
    }

    /// The object id, for object inputs.
    pub fn object_id(&self) -> Option<ObjectId> {
        match self {
            TransactionInput::Object(object) => Some(object.object_id()),
            TransactionInput::Pure { .. } => None,
        }
    }
}
