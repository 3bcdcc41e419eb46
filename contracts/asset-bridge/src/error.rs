//! Error types for the asset bridge contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================
    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only governor can perform this action")]
    UnauthorizedGovernor,

    #[error("Unauthorized: only pending owner can accept")]
    UnauthorizedPendingOwner,

    #[error("No pending owner change")]
    NoPendingOwner,

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Token not bridged: {token}")]
    TokenNotBridged { token: String },

    #[error("No pending native chain transfer for tx id {tx_id}")]
    NativeTransferNotFound { tx_id: String },

    #[error("No pending cross chain transfer for tx hash {tx_hash}")]
    CrossChainTransferNotFound { tx_hash: String },

    // ========================================================================
    // Conflict Errors
    // ========================================================================
    #[error("Asset already bridged: {asset_hash}")]
    AssetAlreadyBridged { asset_hash: String },

    #[error("Token already bridged: {token}")]
    TokenAlreadyBridged { token: String },

    #[error("Bridge already holds {balance} of token {token}")]
    BridgeHoldsToken { token: String, balance: Uint128 },

    #[error("Native chain transfer already claimed: {tx_hash}")]
    TransferAlreadyClaimed { tx_hash: String },

    #[error("Transfer id already recorded: {tx_id}")]
    DuplicateTransferId { tx_id: String },

    // ========================================================================
    // Value Errors
    // ========================================================================
    #[error("Insufficient fee: required {required}, paid {paid}")]
    InsufficientFee { required: Uint128, paid: Uint128 },

    #[error("Insufficient fee balance: requested {requested}, available {available}")]
    InsufficientFeeBalance {
        requested: Uint128,
        available: Uint128,
    },

    #[error("Refund of {requested} exceeds recorded transfer amount {recorded}")]
    RefundExceedsTransfer { requested: Uint128, recorded: Uint128 },

    #[error("Token mismatch: expected {expected}, got {got}")]
    TokenMismatch { expected: String, got: String },

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    // ========================================================================
    // Policy Errors
    // ========================================================================
    #[error("Cannot remove bridge, custody is split: bridge holds {balance} of {total_supply}")]
    SplitCustody {
        balance: Uint128,
        total_supply: Uint128,
    },

    #[error("Token was not created by the bridge and cannot be minted: {token}")]
    NotMintable { token: String },

    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    // ========================================================================
    // Reply Errors
    // ========================================================================
    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Instantiated token address missing from reply")]
    MissingContractAddress,
}
