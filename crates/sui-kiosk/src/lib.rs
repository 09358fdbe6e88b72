#![deny(missing_docs)]
//! Sui kiosk transaction helpers.
//!
//! Builders that append kiosk-related Move calls to a `TransactionBlock`:
//! creating and sharing a transfer policy for a published type, and
//! withdrawing the profits a policy has collected.

pub mod config;
pub mod error;
pub mod transfer_policy;
pub mod utils;

pub use config::KioskConfig;
pub use error::KioskError;
pub use transfer_policy::{
    create_policy, create_policy_with, withdraw_from_policy, withdraw_from_policy_with, CallOutput,
};
pub use utils::{obj_arg, ObjectArgument};
