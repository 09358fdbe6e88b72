//! Transaction commands.

use serde::{Deserialize, Serialize};

use sui_types::bcs::BcsWriter;
use sui_types::type_tag::is_valid_identifier;
use sui_types::{SuiAddress, TypeTag};

use crate::argument::TransactionArgument;
use crate::TransactionError;

/// A call to a Move function.
///
/// `target` and `type_arguments` are kept exactly as the caller wrote them
/// and are only checked when the transaction is serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCall {
    /// `package::module::function`, e.g. `0x2::transfer_policy::new`.
    pub target: String,
    /// Move type strings instantiating the function's type parameters.
    pub type_arguments: Vec<String>,
    /// Arguments in parameter order.
    pub arguments: Vec<TransactionArgument>,
}

impl MoveCall {
    /// Split the target into package address, module and function.
    pub fn parse_target(&self) -> Result<(SuiAddress, String, String), TransactionError> {
        let invalid = |reason: &str| TransactionError::InvalidTarget {
            target: self.target.clone(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = self.target.split("::").collect();
        let [package, module, function] = parts.as_slice() else {
            return Err(invalid("expected package::module::function"));
        };
        let package = SuiAddress::from_hex(package.trim())
            .map_err(|e| invalid(&format!("bad package address: {}", e)))?;
        let (module, function) = (module.trim(), function.trim());
        if !is_valid_identifier(module) {
            return Err(invalid("bad module name"));
        }
        if !is_valid_identifier(function) {
            return Err(invalid("bad function name"));
        }
        Ok((package, module.to_string(), function.to_string()))
    }

    fn write_to(&self, writer: &mut BcsWriter) -> Result<(), TransactionError> {
        let (package, module, function) = self.parse_target()?;
        package.write_to(writer);
        writer.write_str(&module);
        writer.write_str(&function);

        writer.write_len(self.type_arguments.len());
        for ty in &self.type_arguments {
            TypeTag::parse(ty)?.write_to(writer);
        }

        writer.write_len(self.arguments.len());
        for arg in &self.arguments {
            arg.write_to(writer);
        }
        Ok(())
    }
}

/// A single step of a programmable transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Command {
    /// Call a Move function.
    MoveCall(MoveCall),
    /// Send `objects` to the address held in `address` (a pure input or
    /// a result).
    TransferObjects {
        objects: Vec<TransactionArgument>,
        address: TransactionArgument,
    },
}

impl Command {
    /// The Move call, if this command is one.
    pub fn as_move_call(&self) -> Option<&MoveCall> {
        match self {
            Command::MoveCall(call) => Some(call),
            _ => None,
        }
    }

    /// Append the BCS `Command` form.
    pub fn write_to(&self, writer: &mut BcsWriter) -> Result<(), TransactionError> {
        match self {
            Command::MoveCall(call) => {
                writer.write_uleb128(0);
                call.write_to(writer)?;
            }
            Command::TransferObjects { objects, address } => {
                writer.write_uleb128(1);
                writer.write_len(objects.len());
                for object in objects {
                    object.write_to(writer);
                }
                address.write_to(writer);
            }
        }
        Ok(())
    }
}
