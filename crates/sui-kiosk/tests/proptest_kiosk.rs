use proptest::prelude::*;

use sui_kiosk::{create_policy, withdraw_from_policy};
use sui_transaction::{PureValue, TransactionArgument, TransactionBlock, TransactionInput};

/// Strategy for a transaction that already holds `0..6` unrelated calls.
fn arb_prefix() -> impl Strategy<Value = Option<TransactionBlock>> {
    prop::option::of((0usize..6).prop_map(|n| {
        let mut tx = TransactionBlock::new();
        for _ in 0..n {
            tx.move_call("0x2::m::f", &[], vec![]);
        }
        tx
    }))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn create_policy_appends_two_and_returns_cap(prefix in arb_prefix()) {
        let before = prefix.as_ref().map_or(0, TransactionBlock::command_count);
        let out = create_policy("0x2::sui::SUI", "0x7", prefix);

        prop_assert_eq!(out.tx.command_count(), before + 2);
        let created = before as u16;
        prop_assert_eq!(
            out.output,
            TransactionArgument::NestedResult { index: created, result_index: 1 }
        );
        let share = out.tx.commands()[before + 1].as_move_call().unwrap();
        prop_assert_eq!(
            &share.arguments,
            &vec![TransactionArgument::NestedResult { index: created, result_index: 0 }]
        );
    }

    #[test]
    fn withdraw_appends_one_with_encoded_amount(
        prefix in arb_prefix(),
        amount in prop::option::of(any::<u64>()),
    ) {
        let before = prefix.as_ref().map_or(0, TransactionBlock::command_count);
        let out = withdraw_from_policy("0x2::sui::SUI", "0x8", "0x9", amount, prefix);

        prop_assert_eq!(out.tx.command_count(), before + 1);
        let call = out.tx.commands()[before].as_move_call().unwrap();
        let expected = match amount {
            None => PureValue::Vector(vec![]),
            Some(v) => PureValue::Vector(vec![PureValue::Number(v)]),
        };
        match out.tx.input(call.arguments[2]) {
            Some(TransactionInput::Pure { value, .. }) => prop_assert_eq!(value, &expected),
            other => prop_assert!(false, "amount is not a pure input: {:?}", other),
        }
    }
}
