//! Execute handlers for the asset bridge contract.
//!
//! Handlers are organized by category:
//! - `assets` - BridgeErc20Token, BridgeAsset (and its reply), RemoveBridge, MintErc20Token
//! - `transfers` - Transfers to and from the native chain and their settlement
//! - `admin` - Governor, fees, fee withdrawal and ownership transfer

mod admin;
mod assets;
mod transfers;

pub use admin::*;
pub use assets::*;
pub use transfers::*;

use cosmwasm_std::{Addr, MessageInfo, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

/// Load the config, failing unless `sender` is the current governor.
fn ensure_governor(storage: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if *sender != config.governor {
        return Err(ContractError::UnauthorizedGovernor);
    }
    Ok(config)
}

/// Load the config, failing unless `sender` is the current owner.
fn ensure_owner(storage: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if *sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

/// Fees are a floor: any payment of at least `required` is accepted and kept.
fn ensure_fee_paid(
    info: &MessageInfo,
    config: &Config,
    required: Uint128,
) -> Result<Uint128, ContractError> {
    let paid = common::amount_paid(&info.funds, &config.fee_denom);
    if paid < required {
        return Err(ContractError::InsufficientFee { required, paid });
    }
    Ok(paid)
}

fn ensure_not_empty(value: &str, field: &str) -> Result<(), ContractError> {
    if value.is_empty() {
        return Err(ContractError::InvalidInput {
            reason: format!("{} must not be empty", field),
        });
    }
    Ok(())
}
