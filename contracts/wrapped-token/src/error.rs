use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Token(#[from] cw20_base::ContractError),

    // ========================================================================
    // Authorization
    // ========================================================================
    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    // ========================================================================
    // Not found
    // ========================================================================
    #[error("Native address {native_address} is not mapped")]
    NativeAddressNotMapped { native_address: String },

    #[error("Address {address} is not mapped to a native address")]
    AddressNotMapped { address: String },

    #[error("No unwrap request recorded for native address {native_address}")]
    NoUnwrapRequest { native_address: String },

    // ========================================================================
    // Insufficient value / policy
    // ========================================================================
    #[error("Amount below minimum wrap amount of {min_amount}")]
    BelowMinWrapAmount { min_amount: Uint128 },

    #[error("Insufficient pending unwrap balance: requested {requested}, pending {pending}")]
    InsufficientPendingUnwrap { requested: Uint128, pending: Uint128 },

    #[error("Tokens cannot be sent to the token contract, transfer them to request an unwrap")]
    SendToSelf,

    #[error("The wrapped token itself cannot be recovered")]
    CannotRecoverOwnToken,
}
