use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Address {address} is already mapped")]
    AddressAlreadyMapped { address: String },

    #[error("Native address {native_address} is already mapped")]
    NativeAddressAlreadyMapped { native_address: String },

    #[error("Address {address} is not mapped")]
    AddressNotMapped { address: String },

    #[error("Invalid native address: {native_address}")]
    InvalidNativeAddress { native_address: String },
}
