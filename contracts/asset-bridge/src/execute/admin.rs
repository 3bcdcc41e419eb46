//! Owner handlers.
//!
//! This module contains:
//! - Governor appointment
//! - Fee configuration and withdrawal
//! - Two-step ownership transfer

use cosmwasm_std::{BankMsg, Coin, DepsMut, Env, MessageInfo, Response, Uint128};

use super::ensure_owner;
use crate::error::ContractError;
use crate::state::{CONFIG, PENDING_OWNER};

// ============================================================================
// Governor
// ============================================================================

/// Replace the governor. The previous governor loses access immediately.
pub fn execute_set_governor(
    deps: DepsMut,
    info: MessageInfo,
    governor: String,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info.sender)?;
    config.governor = deps.api.addr_validate(&governor)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_governor")
        .add_attribute("governor", config.governor))
}

// ============================================================================
// Fees
// ============================================================================

/// Which fee a setter updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeeKind {
    Bridge,
    TargetTransfer,
    NativeTransfer,
}

impl FeeKind {
    fn action(self) -> &'static str {
        match self {
            FeeKind::Bridge => "set_bridge_fee",
            FeeKind::TargetTransfer => "set_target_transfer_fee",
            FeeKind::NativeTransfer => "set_native_transfer_fee",
        }
    }
}

pub fn execute_set_fee(
    deps: DepsMut,
    info: MessageInfo,
    kind: FeeKind,
    fee: Uint128,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info.sender)?;
    match kind {
        FeeKind::Bridge => config.bridge_fee = fee,
        FeeKind::TargetTransfer => config.target_transfer_fee = fee,
        FeeKind::NativeTransfer => config.native_transfer_fee = fee,
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", kind.action())
        .add_attribute("fee", fee))
}

/// Send `amount` of collected fees to the owner.
pub fn execute_withdraw_fee(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = ensure_owner(deps.storage, &info.sender)?;

    let available = deps
        .querier
        .query_balance(&env.contract.address, &config.fee_denom)?
        .amount;
    if amount > available {
        return Err(ContractError::InsufficientFeeBalance {
            requested: amount,
            available,
        });
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let msg = BankMsg::Send {
        to_address: config.owner.to_string(),
        amount: vec![Coin {
            denom: config.fee_denom.clone(),
            amount,
        }],
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "withdraw_fee")
        .add_attribute("recipient", config.owner)
        .add_attribute("denom", config.fee_denom)
        .add_attribute("amount", amount))
}

// ============================================================================
// Ownership Transfer
// ============================================================================

/// Propose a new owner, replacing any earlier proposal.
pub fn execute_propose_owner(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let new_owner = deps.api.addr_validate(&owner)?;
    PENDING_OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_attribute("action", "propose_owner")
        .add_attribute("pending_owner", new_owner))
}

/// Accept a pending ownership proposal.
pub fn execute_accept_owner(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;
    if info.sender != pending {
        return Err(ContractError::UnauthorizedPendingOwner);
    }

    let mut config = CONFIG.load(deps.storage)?;
    let old_owner = config.owner;
    config.owner = pending;
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_owner")
        .add_attribute("old_owner", old_owner)
        .add_attribute("new_owner", config.owner))
}

pub fn execute_cancel_owner_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    if !PENDING_OWNER.exists(deps.storage) {
        return Err(ContractError::NoPendingOwner);
    }
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new().add_attribute("action", "cancel_owner_proposal"))
}
