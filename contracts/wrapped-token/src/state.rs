use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:wrapped-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decimal places of the native asset.
pub const DECIMALS: u8 = 7;

/// Maximum supply, 168,956,522.0930844 whole tokens.
pub const CAP: u128 = 1_689_565_220_930_844;

/// 1,000 whole tokens.
pub const DEFAULT_MIN_WRAP_AMOUNT: u128 = 1_000 * 10u128.pow(DECIMALS as u32);

#[cw_serde]
pub struct Config {
    /// Mints wrapped supply and settles unwrap requests
    pub owner: Addr,
    /// Address mapping registry consulted on wrap and unwrap
    pub mapping_contract: Addr,
    /// Smallest deposit to self honored as an unwrap request
    pub min_wrap_amount: Uint128,
}

// cw20-base owns the "token_info", "balance" and "allowance*" namespaces.
pub const CONFIG: Item<Config> = Item::new("wrap_config");

/// Tokens deposited to the contract by each holder and not yet burned or reverted
pub const PENDING_UNWRAP: Map<&Addr, Uint128> = Map::new("pending_unwrap");

/// Holder that most recently requested an unwrap for a native address, used
/// once the native address is no longer mapped
pub const UNWRAP_REQUESTERS: Map<&str, Addr> = Map::new("unwrap_requesters");
