#![deny(missing_docs)]

//! Sui SDK - Complete SDK.
//!
//! Re-exports all Sui SDK components for convenient single-crate usage.

pub use sui_types as types;
pub use sui_transaction as transaction;
pub use sui_kiosk as kiosk;
