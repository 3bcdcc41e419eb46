//! Asset Bridge Contract - Arbitrary Asset Bridging to a Native Chain
//!
//! Binds CW20 tokens on the host chain to assets identified by hash on the
//! native chain. A bridged asset is either an existing CW20 token locked in
//! this contract, or a fresh CW20 instantiated by the bridge with the whole
//! supply held in custody.
//!
//! # Outgoing Flow (host chain to native chain)
//! 1. Holder grants an allowance and calls `TransferToNativeChain`
//! 2. Tokens move into bridge custody and a pending record keyed by the
//!    derived `tx_id` is stored
//! 3. The governor credits the native chain, or refunds with
//!    `RevertTransferToNativeChain`
//!
//! # Incoming Flow (native chain to host chain)
//! 1. User claims a native chain deposit with `TransferFromNativeChain`
//! 2. The governor validates the claim off-chain
//! 3. `ConfirmTransfer` releases tokens to the recorded recipient, or
//!    `RevertTransferFromNativeChain` drops the claim
//!
//! # Roles
//! - Owner: appoints the governor, tunes fees, withdraws collected fees
//! - Governor: executes bridging and transfer settlement

pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{compute_tx_id, keccak256};
