//! Common - Shared Types and Utilities for the Own Asset Bridge Contracts
//!
//! This package provides the pieces more than one contract needs to agree on:
//! the query interface of the address mapping registry, the native-chain
//! address policy, and fee payment extraction.

pub mod fee;
pub mod mapping;
pub mod native_address;

pub use fee::amount_paid;
pub use mapping::{
    query_mapped_address, query_native_address, AddressResponse, MappingQueryMsg,
    NativeAddressResponse,
};
pub use native_address::{is_valid_native_address, NATIVE_ADDRESS_LENGTH, NATIVE_ADDRESS_PREFIX};
