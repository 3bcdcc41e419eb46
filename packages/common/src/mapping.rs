//! Query interface of the address mapping registry.
//!
//! The registry contract answers these queries; other contracts use the
//! helpers below to consult it without depending on the registry crate.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};

/// Subset of the registry's query messages other contracts rely on.
/// Serializes identically to the registry's own `QueryMsg` variants.
#[cw_serde]
pub enum MappingQueryMsg {
    /// Native address mapped to a host chain address
    NativeAddress { address: String },
    /// Host chain address mapped to a native address
    Address { native_address: String },
}

#[cw_serde]
pub struct NativeAddressResponse {
    pub native_address: Option<String>,
}

#[cw_serde]
pub struct AddressResponse {
    pub address: Option<Addr>,
}

/// Native address currently mapped to `address`, if any.
pub fn query_native_address(
    querier: &QuerierWrapper,
    registry: &Addr,
    address: &Addr,
) -> StdResult<Option<String>> {
    let res: NativeAddressResponse = querier.query_wasm_smart(
        registry,
        &MappingQueryMsg::NativeAddress {
            address: address.to_string(),
        },
    )?;
    Ok(res.native_address)
}

/// Host chain address currently mapped to `native_address`, if any.
pub fn query_mapped_address(
    querier: &QuerierWrapper,
    registry: &Addr,
    native_address: &str,
) -> StdResult<Option<Addr>> {
    let res: AddressResponse = querier.query_wasm_smart(
        registry,
        &MappingQueryMsg::Address {
            native_address: native_address.to_string(),
        },
    )?;
    Ok(res.address)
}
