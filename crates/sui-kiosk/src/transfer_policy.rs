//! Transfer policy call builders.
//!
//! A `TransferPolicy<T>` decides what must happen before an item of type
//! `T` can change hands, and collects any fees paid along the way. The
//! builders here append the framework calls that create a policy and
//! withdraw its profits. They never fail: bad type strings or object ids
//! are reported when the transaction is serialized or executed.

use sui_transaction::{TransactionArgument, TransactionBlock};

use crate::config::{KioskConfig, TRANSFER_MODULE};
use crate::utils::{obj_arg, ObjectArgument};

/// Move type of the `amount` argument of `transfer_policy::withdraw`.
///
/// The function takes an `Option<u64>`, which has the same BCS form as a
/// vector of zero or one element.
const WITHDRAW_AMOUNT_TYPE: &str = "vector<u64>";

/// The transaction a builder appended to, plus the one output the caller
/// needs from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutput {
    /// The transaction, now holding the appended commands.
    pub tx: TransactionBlock,
    /// Handle to the output: the `TransferPolicyCap<T>` for
    /// [`create_policy`], the profits `Coin<SUI>` for
    /// [`withdraw_from_policy`].
    pub output: TransactionArgument,
}

/// Create a transfer policy for `item_type` and share it.
///
/// Appends `transfer_policy::new(publisher)` and then
/// `transfer::public_share_object<item_type>(policy)`. The policy is
/// consumed by the share call; the returned output is the policy's cap.
///
/// # Arguments
/// * `item_type` - Fully-qualified type the policy governs, e.g. `0xabc::item::Item`.
/// * `publisher` - The `Publisher` object of the package defining `item_type`.
/// * `tx` - Transaction to append to; `None` starts a new one.
pub fn create_policy(
    item_type: &str,
    publisher: impl Into<ObjectArgument>,
    tx: Option<TransactionBlock>,
) -> CallOutput {
    create_policy_with(&KioskConfig::default(), item_type, publisher, tx)
}

/// [`create_policy`] against the framework package named in `config`.
pub fn create_policy_with(
    config: &KioskConfig,
    item_type: &str,
    publisher: impl Into<ObjectArgument>,
    tx: Option<TransactionBlock>,
) -> CallOutput {
    let mut tx = tx.unwrap_or_default();

    let publisher = obj_arg(&mut tx, publisher.into());
    let created = tx.move_call(&config.transfer_policy_target("new"), &[], vec![publisher]);
    let policy = created.nested(0);
    let policy_cap = created.nested(1);

    tx.move_call(
        &config.target(TRANSFER_MODULE, "public_share_object"),
        &[item_type],
        vec![policy],
    );

    tracing::debug!(
        item_type,
        command = created.command_index(),
        "created and shared transfer policy"
    );
    CallOutput { tx, output: policy_cap }
}

/// Withdraw profits collected by a transfer policy.
///
/// Appends `transfer_policy::withdraw<item_type>(policy, cap, amount)`.
/// `None` withdraws everything (an empty `vector<u64>`); `Some(v)`
/// withdraws `v` (a one-element vector). The output is the withdrawn coin,
/// which the caller must use or transfer later in the same transaction.
///
/// # Arguments
/// * `item_type` - Type the policy governs.
/// * `policy` - The `TransferPolicy<T>` object.
/// * `policy_cap` - Its `TransferPolicyCap<T>`.
/// * `amount` - How much to withdraw, or `None` for all of it.
/// * `tx` - Transaction to append to; `None` starts a new one.
pub fn withdraw_from_policy(
    item_type: &str,
    policy: impl Into<ObjectArgument>,
    policy_cap: impl Into<ObjectArgument>,
    amount: Option<u64>,
    tx: Option<TransactionBlock>,
) -> CallOutput {
    withdraw_from_policy_with(&KioskConfig::default(), item_type, policy, policy_cap, amount, tx)
}

/// [`withdraw_from_policy`] against the framework package named in `config`.
pub fn withdraw_from_policy_with(
    config: &KioskConfig,
    item_type: &str,
    policy: impl Into<ObjectArgument>,
    policy_cap: impl Into<ObjectArgument>,
    amount: Option<u64>,
    tx: Option<TransactionBlock>,
) -> CallOutput {
    let mut tx = tx.unwrap_or_default();

    let amount_arg = match amount {
        None => tx.pure(Vec::<u64>::new(), WITHDRAW_AMOUNT_TYPE),
        Some(v) => tx.pure(vec![v], WITHDRAW_AMOUNT_TYPE),
    };

    let policy = obj_arg(&mut tx, policy.into());
    let policy_cap = obj_arg(&mut tx, policy_cap.into());
    let withdrawn = tx.move_call(
        &config.transfer_policy_target("withdraw"),
        &[item_type],
        vec![policy, policy_cap, amount_arg],
    );

    tracing::debug!(
        item_type,
        ?amount,
        command = withdrawn.command_index(),
        "withdrawing from transfer policy"
    );
    CallOutput { tx, output: withdrawn.nested(0) }
}

/// `TransferPolicy<item_type>` as a type string, for the default framework.
pub fn transfer_policy_type(item_type: &str) -> String {
    policy_struct_type(&KioskConfig::default(), "TransferPolicy", item_type)
}

/// `TransferPolicyCap<item_type>` as a type string, for the default framework.
pub fn transfer_policy_cap_type(item_type: &str) -> String {
    policy_struct_type(&KioskConfig::default(), "TransferPolicyCap", item_type)
}

fn policy_struct_type(config: &KioskConfig, name: &str, item_type: &str) -> String {
    format!("{}<{}>", config.transfer_policy_target(name), item_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sui_transaction::{Command, MoveCall, PureValue, TransactionInput};

    const ITEM: &str = "0xABC::item::Item";

    fn move_call(tx: &TransactionBlock, i: usize) -> &MoveCall {
        match &tx.commands()[i] {
            Command::MoveCall(call) => call,
            other => panic!("command {} is not a move call: {:?}", i, other),
        }
    }

    fn pure_value(tx: &TransactionBlock, arg: TransactionArgument) -> &PureValue {
        match tx.input(arg) {
            Some(TransactionInput::Pure { value, type_tag }) => {
                assert_eq!(type_tag, "vector<u64>");
                value
            }
            other => panic!("expected a pure input, got {:?}", other),
        }
    }

    #[test]
    fn test_create_policy_appends_new_then_share() {
        let CallOutput { tx, output } = create_policy(ITEM, "0x5", None);

        assert_eq!(tx.command_count(), 2);
        let new = move_call(&tx, 0);
        assert_eq!(new.target, "0x2::transfer_policy::new");
        assert!(new.type_arguments.is_empty());
        assert_eq!(new.arguments, vec![TransactionArgument::Input { index: 0 }]);

        let share = move_call(&tx, 1);
        assert_eq!(share.target, "0x2::transfer::public_share_object");
        assert_eq!(share.type_arguments, vec![ITEM.to_string()]);
        assert_eq!(
            share.arguments,
            vec![TransactionArgument::NestedResult { index: 0, result_index: 0 }]
        );

        assert_eq!(output, TransactionArgument::NestedResult { index: 0, result_index: 1 });
    }

    #[test]
    fn test_create_policy_appends_to_given_block() {
        let mut tx = TransactionBlock::new();
        tx.move_call("0x2::m::setup", &[], vec![]);
        let publisher = tx.move_call("0x2::package::claim", &[], vec![]).nested(0);

        let out = create_policy(ITEM, publisher, Some(tx));
        assert_eq!(out.tx.command_count(), 4);
        assert_eq!(out.tx.input_count(), 0);
        assert_eq!(move_call(&out.tx, 2).arguments, vec![publisher]);
        assert_eq!(
            move_call(&out.tx, 3).arguments,
            vec![TransactionArgument::NestedResult { index: 2, result_index: 0 }]
        );
        assert_eq!(out.output, TransactionArgument::NestedResult { index: 2, result_index: 1 });
    }

    #[test]
    fn test_withdraw_all_uses_empty_vector() {
        let out = withdraw_from_policy(ITEM, "0x10", "0x11", None, None);
        assert_eq!(out.tx.command_count(), 1);

        let call = move_call(&out.tx, 0);
        assert_eq!(call.target, "0x2::transfer_policy::withdraw");
        assert_eq!(call.type_arguments, vec![ITEM.to_string()]);
        assert_eq!(call.arguments.len(), 3);
        assert_eq!(pure_value(&out.tx, call.arguments[2]), &PureValue::Vector(vec![]));
        assert_eq!(out.output, TransactionArgument::NestedResult { index: 0, result_index: 0 });
    }

    #[test]
    fn test_withdraw_amount_uses_single_element() {
        let out = withdraw_from_policy(ITEM, "0x10", "0x11", Some(1000), None);
        let call = move_call(&out.tx, 0);
        assert_eq!(
            pure_value(&out.tx, call.arguments[2]),
            &PureValue::Vector(vec![PureValue::Number(1000)])
        );
    }

    #[test]
    fn test_withdraw_argument_order() {
        let out = withdraw_from_policy(ITEM, "0x10", "0x11", Some(1), None);
        let call = move_call(&out.tx, 0);
        let ids: Vec<_> = call.arguments[..2]
            .iter()
            .map(|a| out.tx.input(*a).and_then(TransactionInput::object_id))
            .map(|id| id.map(|id| id.to_short_hex()))
            .collect();
        assert_eq!(ids, vec![Some("0x10".to_string()), Some("0x11".to_string())]);
    }

    #[test]
    fn test_custom_framework_package() {
        let config = KioskConfig::with_framework_package("0xdee9").unwrap();
        let out = create_policy_with(&config, ITEM, "0x5", None);
        assert_eq!(move_call(&out.tx, 0).target, "0xdee9::transfer_policy::new");
        assert_eq!(move_call(&out.tx, 1).target, "0xdee9::transfer::public_share_object");

        let out = withdraw_from_policy_with(&config, ITEM, "0x10", "0x11", None, Some(out.tx));
        assert_eq!(move_call(&out.tx, 2).target, "0xdee9::transfer_policy::withdraw");
    }

    #[test]
    fn test_policy_type_strings() {
        assert_eq!(
            transfer_policy_type(ITEM),
            "0x2::transfer_policy::TransferPolicy<0xABC::item::Item>"
        );
        assert_eq!(
            transfer_policy_cap_type(ITEM),
            "0x2::transfer_policy::TransferPolicyCap<0xABC::item::Item>"
        );
    }
}
