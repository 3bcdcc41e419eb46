//! Address Mapping Registry
//!
//! Associates a host chain address with a native chain address and the
//! signature proving the holder controls both. Each host address holds at
//! most one active mapping; only the admin can remove one, after which the
//! holder may register a new native address.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
