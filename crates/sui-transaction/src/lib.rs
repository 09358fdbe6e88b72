/// Sui SDK - Programmable transaction building and serialization.
///
/// Provides the `TransactionBlock` builder with pure and object inputs,
/// Move calls, and object transfers, plus BCS and JSON serialization of
/// the resulting programmable transaction.

pub mod argument;
pub mod command;
pub mod input;
pub mod transaction;

mod error;
pub use error::TransactionError;
pub use argument::{TransactionArgument, TransactionResult};
pub use command::{Command, MoveCall};
pub use input::{ObjectInput, ObjectRef, PureValue, SharedObjectRef, TransactionInput};
pub use transaction::TransactionBlock;
