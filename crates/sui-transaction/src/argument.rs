//! Command arguments.
//!
//! A `TransactionArgument` points at a value available to a command: the
//! gas coin, one of the transaction's inputs, or an output of an earlier
//! command.

use serde::{Deserialize, Serialize};

use sui_types::bcs::BcsWriter;

/// A reference to a value inside a programmable transaction.
///
/// The JSON form is tagged by `kind`, e.g. `{"kind":"Input","index":0}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TransactionArgument {
    /// The coin used to pay for gas.
    GasCoin,
    /// The input at `index` in the transaction's input list.
    Input {
        /// Position in the input list.
        index: u16,
    },
    /// The whole result of the command at `index`.
    Result {
        /// Position in the command list.
        index: u16,
    },
    /// One value of a command that returns several.
    NestedResult {
        /// Position in the command list.
        index: u16,
        /// Position within that command's outputs.
        #[serde(rename = "resultIndex")]
        result_index: u16,
    },
}

impl TransactionArgument {
    /// Append the BCS form (variant index, then the indices as u16 LE).
    pub fn write_to(&self, writer: &mut BcsWriter) {
        match *self {
            TransactionArgument::GasCoin => writer.write_uleb128(0),
            TransactionArgument::Input { index } => {
                writer.write_uleb128(1);
                writer.write_u16_le(index);
            }
            TransactionArgument::Result { index } => {
                writer.write_uleb128(2);
                writer.write_u16_le(index);
            }
            TransactionArgument::NestedResult { index, result_index } => {
                writer.write_uleb128(3);
                writer.write_u16_le(index);
                writer.write_u16_le(result_index);
            }
        }
    }
}

/// The handle returned when a command is appended.
///
/// Use [`nested`](Self::nested) to pick one output of a command that
/// returns a tuple, or convert it into a `TransactionArgument` to pass the
/// whole result on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransactionResult {
    index: u16,
}

impl TransactionResult {
    pub(crate) fn new(index: u16) -> Self {
        TransactionResult { index }
    }

    /// Position of the producing command.
    pub fn command_index(&self) -> u16 {
        self.index
    }

    /// The `i`-th output of the command.
    pub fn nested(&self, i: u16) -> TransactionArgument {
        TransactionArgument::NestedResult {
            index: self.index,
            result_index: i,
        }
    }
}

impl From<TransactionResult> for TransactionArgument {
    fn from(result: TransactionResult) -> Self {
        TransactionArgument::Result { index: result.index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let arg = TransactionArgument::NestedResult { index: 0, result_index: 1 };
        let json = serde_json::to_string(&arg).unwrap();
        assert_eq!(json, r#"{"kind":"NestedResult","index":0,"resultIndex":1}"#);
        assert_eq!(
            serde_json::to_string(&TransactionArgument::GasCoin).unwrap(),
            r#"{"kind":"GasCoin"}"#
        );
    }

    #[test]
    fn test_bcs_form() {
        let mut w = BcsWriter::new();
        TransactionArgument::NestedResult { index: 2, result_index: 1 }.write_to(&mut w);
        assert_eq!(w.into_bytes(), vec![3, 2, 0, 1, 0]);
    }

    #[test]
    fn test_result_handle() {
        let r = TransactionResult::new(4);
        assert_eq!(r.command_index(), 4);
        assert_eq!(
            r.nested(1),
            TransactionArgument::NestedResult { index: 4, result_index: 1 }
        );
        assert_eq!(TransactionArgument::from(r), TransactionArgument::Result { index: 4 });
    }
}
