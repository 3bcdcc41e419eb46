use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:address-mapping";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    /// Only account allowed to remove mappings
    pub admin: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// host address => native address
pub const NATIVE_ADDRESSES: Map<&Addr, String> = Map::new("native_addresses");

/// native address => host address
pub const ADDRESSES: Map<&str, Addr> = Map::new("addresses");

/// native address => signature submitted with the mapping
pub const SIGNATURES: Map<&str, String> = Map::new("signatures");
