//! Wrapped Token - Capped CW20 Ledger with Unwrap Requests
//!
//! A CW20 token representing a native chain asset on the host chain. Supply is
//! minted by the owner against deposits observed on the native chain and is
//! bounded by a fixed cap.
//!
//! ## Unwrap flow
//!
//! 1. A holder whose address is registered in the address mapping contract
//!    transfers tokens to this contract's own address.
//! 2. The transfer is recorded as a pending unwrap balance of the holder.
//! 3. The owner either burns the pending tokens once the native chain payout is
//!    done, or reverts them back to the holder minus a fee that is burned.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
