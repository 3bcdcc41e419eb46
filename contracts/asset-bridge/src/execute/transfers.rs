//! Transfer handlers in both directions and their settlement.

use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use super::{ensure_fee_paid, ensure_governor, ensure_not_empty};
use crate::error::ContractError;
use crate::hash::tx_id_for;
use crate::state::{
    CrossChainTransfer, NativeChainTransfer, ASSET_HASHES, CONFIG, OUTGOING_NONCE,
    PENDING_CROSS_CHAIN_TRANSFERS, PENDING_NATIVE_TRANSFERS,
};

fn cw20_transfer(
    token: &str,
    recipient: &str,
    amount: Uint128,
) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

// ============================================================================
// Host Chain -> Native Chain
// ============================================================================

/// Take `amount` of a bridged token into custody for delivery on the native chain.
///
/// The tokens are pulled with `TransferFrom`, so the sender must have granted
/// the bridge an allowance. Emits the `tx_id` the pending record is keyed by.
pub fn execute_transfer_to_native_chain(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    native_recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let paid = ensure_fee_paid(&info, &config, config.native_transfer_fee)?;
    ensure_not_empty(&native_recipient, "native_recipient")?;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let token_addr = deps.api.addr_validate(&token)?;
    if !ASSET_HASHES.has(deps.storage, &token_addr) {
        return Err(ContractError::TokenNotBridged { token });
    }

    let nonce = OUTGOING_NONCE.may_load(deps.storage)?.unwrap_or_default();
    OUTGOING_NONCE.save(deps.storage, &(nonce + 1))?;

    let tx_id = tx_id_for(&env, nonce);
    if PENDING_NATIVE_TRANSFERS.has(deps.storage, &tx_id) {
        return Err(ContractError::DuplicateTransferId { tx_id });
    }
    PENDING_NATIVE_TRANSFERS.save(
        deps.storage,
        &tx_id,
        &NativeChainTransfer {
            sender: info.sender.clone(),
            token: token_addr.clone(),
            amount,
            native_recipient: native_recipient.clone(),
        },
    )?;

    // Any allowance or balance shortfall fails here and reverts the record
    let pull = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(pull)
        .add_attribute("action", "transfer_to_native_chain")
        .add_attribute("tx_id", tx_id)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("token", token_addr)
        .add_attribute("native_recipient", native_recipient)
        .add_attribute("amount", amount)
        .add_attribute("fee_paid", paid))
}

/// Refund a transfer to the native chain whose native credit never happened.
///
/// The record is cleared even on a partial refund. The part left in custody
/// is reported as `unrefunded_amount`.
pub fn execute_revert_transfer_to_native_chain(
    deps: DepsMut,
    info: MessageInfo,
    tx_id: String,
    token: String,
    refund_recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_governor(deps.storage, &info.sender)?;

    let transfer = PENDING_NATIVE_TRANSFERS
        .may_load(deps.storage, &tx_id)?
        .ok_or_else(|| ContractError::NativeTransferNotFound {
            tx_id: tx_id.clone(),
        })?;

    let token_addr = deps.api.addr_validate(&token)?;
    if token_addr != transfer.token {
        return Err(ContractError::TokenMismatch {
            expected: transfer.token.to_string(),
            got: token,
        });
    }
    if amount > transfer.amount {
        return Err(ContractError::RefundExceedsTransfer {
            requested: amount,
            recorded: transfer.amount,
        });
    }
    let recipient_addr = deps.api.addr_validate(&refund_recipient)?;
    let unrefunded = transfer.amount - amount;

    PENDING_NATIVE_TRANSFERS.remove(deps.storage, &tx_id);

    let mut messages = vec![];
    if !amount.is_zero() {
        messages.push(cw20_transfer(
            token_addr.as_str(),
            recipient_addr.as_str(),
            amount,
        )?);
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "revert_transfer_to_native_chain")
        .add_attribute("tx_id", tx_id)
        .add_attribute("token", token_addr)
        .add_attribute("refund_recipient", recipient_addr)
        .add_attribute("amount", amount)
        .add_attribute("unrefunded_amount", unrefunded))
}

// ============================================================================
// Native Chain -> Host Chain
// ============================================================================

/// Record a claim on a native chain deposit. A tx hash can be claimed once
/// until it is confirmed or reverted.
pub fn execute_transfer_from_native_chain(
    deps: DepsMut,
    info: MessageInfo,
    tx_hash: String,
    proof: String,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let paid = ensure_fee_paid(&info, &config, config.target_transfer_fee)?;
    ensure_not_empty(&tx_hash, "tx_hash")?;
    ensure_not_empty(&proof, "proof")?;

    if PENDING_CROSS_CHAIN_TRANSFERS.has(deps.storage, &tx_hash) {
        return Err(ContractError::TransferAlreadyClaimed { tx_hash });
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    PENDING_CROSS_CHAIN_TRANSFERS.save(
        deps.storage,
        &tx_hash,
        &CrossChainTransfer {
            recipient: recipient_addr.clone(),
            proof: proof.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from_native_chain")
        .add_attribute("tx_hash", tx_hash)
        .add_attribute("recipient", recipient_addr)
        .add_attribute("proof", proof)
        .add_attribute("fee_paid", paid))
}

/// Release `amount` of a bridged token to the recipient of a claim.
pub fn execute_confirm_transfer(
    deps: DepsMut,
    info: MessageInfo,
    tx_hash: String,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_governor(deps.storage, &info.sender)?;

    let transfer = PENDING_CROSS_CHAIN_TRANSFERS
        .may_load(deps.storage, &tx_hash)?
        .ok_or_else(|| ContractError::CrossChainTransferNotFound {
            tx_hash: tx_hash.clone(),
        })?;

    let token_addr = deps.api.addr_validate(&token)?;
    if !ASSET_HASHES.has(deps.storage, &token_addr) {
        return Err(ContractError::TokenNotBridged { token });
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    PENDING_CROSS_CHAIN_TRANSFERS.remove(deps.storage, &tx_hash);

    let release = cw20_transfer(token_addr.as_str(), transfer.recipient.as_str(), amount)?;

    Ok(Response::new()
        .add_message(release)
        .add_attribute("action", "confirm_transfer")
        .add_attribute("tx_hash", tx_hash)
        .add_attribute("token", token_addr)
        .add_attribute("recipient", transfer.recipient)
        .add_attribute("amount", amount))
}

/// Drop a claim the governor found invalid. Nothing is paid out.
pub fn execute_revert_transfer_from_native_chain(
    deps: DepsMut,
    info: MessageInfo,
    tx_hash: String,
) -> Result<Response, ContractError> {
    ensure_governor(deps.storage, &info.sender)?;

    let transfer = PENDING_CROSS_CHAIN_TRANSFERS
        .may_load(deps.storage, &tx_hash)?
        .ok_or_else(|| ContractError::CrossChainTransferNotFound {
            tx_hash: tx_hash.clone(),
        })?;
    PENDING_CROSS_CHAIN_TRANSFERS.remove(deps.storage, &tx_hash);

    Ok(Response::new()
        .add_attribute("action", "revert_transfer_from_native_chain")
        .add_attribute("tx_hash", tx_hash)
        .add_attribute("recipient", transfer.recipient))
}
