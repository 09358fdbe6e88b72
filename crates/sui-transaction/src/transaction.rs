//! Programmable transaction builder.
//!
//! A `TransactionBlock` is an ordered list of inputs and an ordered list of
//! commands. Builder methods append to those lists and hand back argument
//! handles that later commands use to refer to inputs and earlier results.
//! Nothing is validated while building; `to_bytes` is where malformed
//! targets, type strings, pure values and unresolved objects are reported.

use serde::{Deserialize, Serialize};

use sui_types::bcs::BcsWriter;
use sui_types::{ObjectId, SuiAddress};

use crate::argument::{TransactionArgument, TransactionResult};
use crate::command::{Command, MoveCall};
use crate::input::{ObjectInput, ObjectRef, PureValue, SharedObjectRef, TransactionInput};
use crate::TransactionError;

/// A programmable transaction under construction.
///
/// # Wire format
///
/// | Field         | Encoding                         |
/// |---------------|----------------------------------|
/// | input count   | ULEB128                          |
/// | inputs        | `CallArg` per input              |
/// | command count | ULEB128                          |
/// | commands      | `Command` per command            |
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionBlock {
    inputs: Vec<TransactionInput>,
    commands: Vec<Command>,
}

impl TransactionBlock {
    /// Create an empty transaction block.
    pub fn new() -> Self {
        TransactionBlock {
            inputs: Vec::new(),
            commands: Vec::new(),
        }
    }

    // -----------------------------------------------------------------
    // Inputs
    // -----------------------------------------------------------------

    /// Append a pure input holding `value`, declared as Move type `type_tag`.
    ///
    /// The value is encoded against the type when the block is serialized.
    ///
    /// # Arguments
    /// * `value` - The literal value.
    /// * `type_tag` - Its Move type, e.g. `"vector<u64>"`.
    ///
    /// # Returns
    /// An `Input` argument for the new input. Past 65,536 inputs the index
    /// saturates at `u16::MAX`, so handles are no longer unique and
    /// [`to_bytes`](Self::to_bytes) rejects the block.
    pub fn pure(&mut self, value: impl Into<PureValue>, type_tag: &str) -> TransactionArgument {
        self.push_input(TransactionInput::Pure {
            value: value.into(),
            type_tag: type_tag.to_string(),
        })
    }

    /// Add an object input by id alone.
    ///
    /// If an input for the same object already exists, its argument is
    /// returned and nothing is added.
    pub fn object(&mut self, object_id: ObjectId) -> TransactionArgument {
        self.object_input(ObjectInput::Unresolved { object_id })
    }

    /// Add an owned or immutable object input by full reference.
    ///
    /// Deduplicated by object id like [`object`](Self::object). A bare id
    /// already present is upgraded to this reference; an existing resolved
    /// reference is kept, even if it is of the other kind.
    pub fn object_ref(&mut self, object_ref: ObjectRef) -> TransactionArgument {
        self.object_input(ObjectInput::ImmOrOwned(object_ref))
    }

    /// Add a shared object input.
    ///
    /// Deduplicated by object id like [`object`](Self::object). A bare id
    /// already present is upgraded to this reference; an existing resolved
    /// reference is kept, even if it is of the other kind.
    pub fn shared_object_ref(&mut self, shared: SharedObjectRef) -> TransactionArgument {
        self.object_input(ObjectInput::Shared(shared))
    }

    fn object_input(&mut self, object: ObjectInput) -> TransactionArgument {
        let object_id = object.object_id();
        let existing = self
            .inputs
            .iter()
            .position(|input| input.object_id() == Some(object_id));

        match existing {
            Some(i) => {
                if object.is_resolved() {
                    if let TransactionInput::Object(current) = &mut self.inputs[i] {
                        if !current.is_resolved() {
                            *current = object;
                        } else if std::mem::discriminant(&*current)
                            != std::mem::discriminant(&object)
                        {
                            tracing::debug!(
                                object_id = %object_id,
                                input = i,
                                kept = ?current,
                                ignored = ?object,
                                "object already added as a different kind; keeping the first"
                            );
                        }
                    }
                }
                tracing::trace!(object_id = %object_id, input = i, "reusing object input");
                input_argument(i)
            }
            None => {
                let arg = self.push_input(TransactionInput::Object(object));
                tracing::debug!(object_id = %object_id, ?arg, "added object input");
                arg
            }
        }
    }

    fn push_input(&mut self, input: TransactionInput) -> TransactionArgument {
        self.inputs.push(input);
        input_argument(self.inputs.len() - 1)
    }

    /// The gas coin argument.
    pub fn gas(&self) -> TransactionArgument {
        TransactionArgument::GasCoin
    }

    // -----------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------

    /// Append a Move call.
    ///
    /// # Arguments
    /// * `target` - `package::module::function`.
    /// * `type_arguments` - Move type strings instantiating the function.
    /// * `arguments` - Arguments in parameter order.
    ///
    /// # Returns
    /// A handle to the call's results. Past 65,536 commands the index
    /// saturates at `u16::MAX`, so handles are no longer unique and
    /// [`to_bytes`](Self::to_bytes) rejects the block.
    pub fn move_call(
        &mut self,
        target: &str,
        type_arguments: &[&str],
        arguments: Vec<TransactionArgument>,
    ) -> TransactionResult {
        let result = self.push_command(Command::MoveCall(MoveCall {
            target: target.to_string(),
            type_arguments: type_arguments.iter().map(|t| t.to_string()).collect(),
            arguments,
        }));
        tracing::debug!(
            target_fn = target,
            command = result.command_index(),
            "appended move call"
        );
        result
    }

    /// Append a transfer of `objects` to `recipient`.
    ///
    /// The recipient is added as a pure `address` input.
    pub fn transfer_objects(
        &mut self,
        objects: Vec<TransactionArgument>,
        recipient: SuiAddress,
    ) -> TransactionResult {
        let address = self.pure(recipient, "address");
        self.push_command(Command::TransferObjects { objects, address })
    }

    fn push_command(&mut self, command: Command) -> TransactionResult {
        self.commands.push(command);
        TransactionResult::new(index_u16(self.commands.len() - 1))
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    /// The inputs, in order.
    pub fn inputs(&self) -> &[TransactionInput] {
        &self.inputs
    }

    /// The commands, in order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Return the number of inputs.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Return the number of commands.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Look up the input an `Input` argument points at.
    pub fn input(&self, arg: TransactionArgument) -> Option<&TransactionInput> {
        match arg {
            TransactionArgument::Input { index } => self.inputs.get(usize::from(index)),
            _ => None,
        }
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    /// Serialize to the BCS `ProgrammableTransaction` form.
    ///
    /// # Returns
    /// The encoded bytes, or the first problem found: too many inputs or
    /// commands, an unresolved object, a malformed target or type string,
    /// or a pure value that does not fit its declared type.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        if self.inputs.len() > usize::from(u16::MAX) + 1 {
            return Err(TransactionError::InvalidTransaction(format!(
                "{} inputs exceed the u16 index space",
                self.inputs.len()
            )));
        }
        if self.commands.len() > usize::from(u16::MAX) + 1 {
            return Err(TransactionError::InvalidTransaction(format!(
                "{} commands exceed the u16 index space",
                self.commands.len()
            )));
        }

        let mut writer = BcsWriter::with_capacity(256);
        writer.write_len(self.inputs.len());
        for input in &self.inputs {
            input.write_to(&mut writer)?;
        }
        writer.write_len(self.commands.len());
        for command in &self.commands {
            command.write_to(&mut writer)?;
        }
        Ok(writer.into_bytes())
    }

    /// Serialize to BCS and hex-encode.
    pub fn to_hex(&self) -> Result<String, TransactionError> {
        Ok(hex::encode(self.to_bytes()?))
    }

    /// Serialize the builder state (not the BCS form) to JSON.
    pub fn to_json(&self) -> Result<String, TransactionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a builder from [`to_json`](Self::to_json) output.
    pub fn from_json(json: &str) -> Result<Self, TransactionError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn input_argument(i: usize) -> TransactionArgument {
    TransactionArgument::Input { index: index_u16(i) }
}

/// Argument indices are u16 on the wire. Past that the index saturates,
/// and `to_bytes` rejects the block.
fn index_u16(i: usize) -> u16 {
    u16::try_from(i).unwrap_or(u16::MAX)
}
