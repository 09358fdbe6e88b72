//! Object argument helpers shared by the kiosk builders.

use sui_transaction::{ObjectRef, SharedObjectRef, TransactionArgument, TransactionBlock};
use sui_types::SuiAddress;

/// Any way a caller can point at an object when building a kiosk call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectArgument {
    /// A hex object id. Resolution is left to whoever submits the
    /// transaction; a malformed id is kept as text and reported then.
    Id(String),
    /// An owned or immutable object at a known version.
    Owned(ObjectRef),
    /// A shared object.
    Shared(SharedObjectRef),
    /// A value already inside the transaction (an input or a result).
    Argument(TransactionArgument),
}

impl From<&str> for ObjectArgument {
    fn from(id: &str) -> Self {
        ObjectArgument::Id(id.to_string())
    }
}

impl From<String> for ObjectArgument {
    fn from(id: String) -> Self {
        ObjectArgument::Id(id)
    }
}

impl From<SuiAddress> for ObjectArgument {
    fn from(id: SuiAddress) -> Self {
        ObjectArgument::Id(id.to_hex())
    }
}

impl From<ObjectRef> for ObjectArgument {
    fn from(r: ObjectRef) -> Self {
        ObjectArgument::Owned(r)
    }
}

impl From<SharedObjectRef> for ObjectArgument {
    fn from(r: SharedObjectRef) -> Self {
        ObjectArgument::Shared(r)
    }
}

impl From<TransactionArgument> for ObjectArgument {
    fn from(arg: TransactionArgument) -> Self {
        ObjectArgument::Argument(arg)
    }
}

/// Turn an [`ObjectArgument`] into a call argument of `tx`.
///
/// Ids and references become (deduplicated) object inputs; an existing
/// argument is returned unchanged. An id that is not valid hex cannot
/// become an object input, so it is carried as a pure `address` string
/// input and fails when the transaction is serialized.
pub fn obj_arg(tx: &mut TransactionBlock, arg: ObjectArgument) -> TransactionArgument {
    match arg {
        ObjectArgument::Id(id) => match SuiAddress::from_hex(&id) {
            Ok(object_id) => tx.object(object_id),
            Err(e) => {
                tracing::debug!(id = %id, error = %e, "object id is not an address");
                tx.pure(id, "address")
            }
        },
        ObjectArgument::Owned(r) => tx.object_ref(r),
        ObjectArgument::Shared(r) => tx.shared_object_ref(r),
        ObjectArgument::Argument(a) => a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sui_transaction::{ObjectInput, TransactionError, TransactionInput};
    use sui_types::ObjectDigest;

    #[test]
    fn test_id_becomes_object_input() {
        let mut tx = TransactionBlock::new();
        let arg = obj_arg(&mut tx, "0x1234".into());
        assert_eq!(arg, TransactionArgument::Input { index: 0 });
        assert_eq!(
            tx.input(arg),
            Some(&TransactionInput::Object(ObjectInput::Unresolved {
                object_id: SuiAddress::from_hex("0x1234").unwrap(),
            }))
        );
    }

    #[test]
    fn test_same_object_twice_shares_input() {
        let mut tx = TransactionBlock::new();
        let id = SuiAddress::from_hex("0x99").unwrap();
        let a = obj_arg(&mut tx, id.into());
        let b = obj_arg(&mut tx, "0x0099".into());
        assert_eq!(a, b);
        assert_eq!(tx.input_count(), 1);
    }

    #[test]
    fn test_refs_are_resolved_inputs() {
        let mut tx = TransactionBlock::new();
        let owned = ObjectRef {
            object_id: SuiAddress::from_hex("0x1").unwrap(),
            version: 2,
            digest: ObjectDigest::default(),
        };
        let shared = SharedObjectRef {
            object_id: SuiAddress::from_hex("0x2").unwrap(),
            initial_shared_version: 1,
            mutable: true,
        };
        obj_arg(&mut tx, owned.into());
        obj_arg(&mut tx, shared.into());
        assert!(tx.to_bytes().is_ok());
    }

    #[test]
    fn test_existing_argument_passes_through() {
        let mut tx = TransactionBlock::new();
        let result = tx.move_call("0x2::m::f", &[], vec![]);
        let arg = obj_arg(&mut tx, result.nested(1).into());
        assert_eq!(arg, result.nested(1));
        assert_eq!(tx.input_count(), 0);
    }

    #[test]
    fn test_malformed_id_fails_at_serialization() {
        let mut tx = TransactionBlock::new();
        obj_arg(&mut tx, "not-an-id".into());
        assert_eq!(tx.input_count(), 1);
        assert!(matches!(
            tx.to_bytes(),
            Err(TransactionError::TypeMismatch { .. })
        ));
    }
}
