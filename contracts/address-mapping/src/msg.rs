use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

pub use common::mapping::{AddressResponse, NativeAddressResponse};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin allowed to remove mappings (defaults to the instantiator)
    pub admin: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Map the sender to `native_address`.
    ///
    /// Authorization: Anyone without an active mapping
    MapAddress {
        native_address: String,
        signature: String,
    },

    /// Remove the mapping of `address`, clearing the reverse lookup and signature.
    ///
    /// Authorization: Admin only
    RemoveMappedAddress { address: String },

    /// Hand the admin role to another account.
    ///
    /// Authorization: Admin only
    UpdateAdmin { admin: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Native address mapped to a host address
    #[returns(NativeAddressResponse)]
    NativeAddress { address: String },

    /// Host address mapped to a native address
    #[returns(AddressResponse)]
    Address { native_address: String },

    /// Signature stored for a native address
    #[returns(SignatureResponse)]
    Signature { native_address: String },

    /// Full mapping of a host address
    #[returns(MappingResponse)]
    Mapping { address: String },

    /// Paginated list of mappings, ordered by host address
    #[returns(MappingsResponse)]
    Mappings {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
}

#[cw_serde]
pub struct SignatureResponse {
    pub signature: Option<String>,
}

#[cw_serde]
pub struct MappingEntry {
    pub address: Addr,
    pub native_address: String,
    pub signature: String,
}

#[cw_serde]
pub struct MappingResponse {
    pub mapping: Option<MappingEntry>,
}

#[cw_serde]
pub struct MappingsResponse {
    pub mappings: Vec<MappingEntry>,
}
