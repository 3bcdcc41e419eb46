//! State definitions for the asset bridge contract
//!
//! A bridged asset occupies three slots (`ERC20_TOKENS`, `ASSET_HASHES`,
//! `ACCOUNTS_FOR_ASSETS`) that are always written and cleared together.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:asset-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decimals of tokens created by `BridgeAsset` unless given
pub const DEFAULT_DECIMALS: u8 = 18;

pub const INSTANTIATE_TOKEN_REPLY_ID: u64 = 1;

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    /// Manages the governor and fees
    pub owner: Addr,
    /// Executes bridge operations
    pub governor: Addr,
    /// cw20-base code instantiated by `BridgeAsset`
    pub token_code_id: u64,
    /// Bank denom fees are paid in
    pub fee_denom: String,
    pub bridge_fee: Uint128,
    /// Charged on claims of native chain deposits
    pub target_transfer_fee: Uint128,
    /// Charged on transfers to the native chain
    pub native_transfer_fee: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");

// ============================================================================
// Bridged Assets
// ============================================================================

/// asset hash -> token
pub const ERC20_TOKENS: Map<&str, Addr> = Map::new("erc20_tokens");

/// token -> asset hash
pub const ASSET_HASHES: Map<&Addr, String> = Map::new("asset_hashes");

/// asset hash -> native chain custodial account
pub const ACCOUNTS_FOR_ASSETS: Map<&str, String> = Map::new("accounts_for_assets");

/// Tokens instantiated by the bridge, which remains their minter
pub const MINTABLE_TOKENS: Map<&Addr, bool> = Map::new("mintable_tokens");

/// Asset awaiting the address of its freshly instantiated token
#[cw_serde]
pub struct PendingBridge {
    pub asset_hash: String,
    pub account_hash: String,
}

pub const PENDING_BRIDGE: Item<PendingBridge> = Item::new("pending_bridge");

// ============================================================================
// Pending Transfers
// ============================================================================

/// Tokens taken into custody for a transfer to the native chain
#[cw_serde]
pub struct NativeChainTransfer {
    pub sender: Addr,
    pub token: Addr,
    pub amount: Uint128,
    pub native_recipient: String,
}

/// Claim on a native chain deposit awaiting governor settlement
#[cw_serde]
pub struct CrossChainTransfer {
    pub recipient: Addr,
    pub proof: String,
}

/// Outgoing transfer counter, part of every derived tx id
pub const OUTGOING_NONCE: Item<u64> = Item::new("outgoing_nonce");

/// tx id -> outgoing transfer
pub const PENDING_NATIVE_TRANSFERS: Map<&str, NativeChainTransfer> =
    Map::new("pending_native_transfers");

/// native tx hash -> incoming claim
pub const PENDING_CROSS_CHAIN_TRANSFERS: Map<&str, CrossChainTransfer> =
    Map::new("pending_cross_chain_transfers");
