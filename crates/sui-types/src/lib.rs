/// Sui SDK - Core value types and binary encoding.
///
/// This crate provides the foundational building blocks for the Sui SDK:
/// - 32-byte account addresses and object identifiers
/// - Object digests with Base58 text form
/// - Move type tags (parsing, canonical display, BCS encoding)
/// - A BCS writer for little-endian integers and ULEB128 lengths

pub mod address;
pub mod bcs;
pub mod digest;
pub mod type_tag;

mod error;
pub use error::TypesError;
pub use address::{ObjectId, SuiAddress, MOVE_STDLIB_ADDRESS, SUI_FRAMEWORK_ADDRESS};
pub use digest::ObjectDigest;
pub use type_tag::{StructTag, TypeTag};
