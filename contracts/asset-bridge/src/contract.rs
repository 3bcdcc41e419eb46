//! Asset Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_owner, execute_bridge_asset, execute_bridge_erc20_token,
    execute_cancel_owner_proposal, execute_confirm_transfer, execute_mint_erc20_token,
    execute_propose_owner, execute_remove_bridge, execute_revert_transfer_from_native_chain,
    execute_revert_transfer_to_native_chain, execute_set_fee, execute_set_governor,
    execute_transfer_from_native_chain, execute_transfer_to_native_chain, execute_withdraw_fee,
    handle_token_instantiated, FeeKind,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_account_for_asset, query_asset_hash, query_bridged_asset, query_bridged_assets,
    query_collected_fees, query_config, query_erc20_token, query_pending_cross_chain_transfer,
    query_pending_native_chain_transfer, query_pending_owner,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, INSTANTIATE_TOKEN_REPLY_ID, OUTGOING_NONCE,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.fee_denom.is_empty() {
        return Err(ContractError::InvalidInput {
            reason: "fee_denom must not be empty".to_string(),
        });
    }

    let governor = match msg.governor {
        Some(governor) => deps.api.addr_validate(&governor)?,
        None => info.sender.clone(),
    };

    let config = Config {
        owner: info.sender,
        governor,
        token_code_id: msg.token_code_id,
        fee_denom: msg.fee_denom,
        bridge_fee: msg.bridge_fee,
        target_transfer_fee: msg.target_transfer_fee,
        native_transfer_fee: msg.native_transfer_fee,
    };
    CONFIG.save(deps.storage, &config)?;

    OUTGOING_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("governor", config.governor)
        .add_attribute("token_code_id", config.token_code_id.to_string())
        .add_attribute("fee_denom", config.fee_denom)
        .add_attribute("bridge_fee", config.bridge_fee)
        .add_attribute("target_transfer_fee", config.target_transfer_fee)
        .add_attribute("native_transfer_fee", config.native_transfer_fee))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Asset management
        ExecuteMsg::BridgeErc20Token {
            token,
            asset_hash,
            account_hash,
        } => execute_bridge_erc20_token(deps, env, info, token, asset_hash, account_hash),
        ExecuteMsg::BridgeAsset {
            asset_hash,
            account_hash,
            name,
            symbol,
            total_supply,
            decimals,
        } => execute_bridge_asset(
            deps,
            env,
            info,
            asset_hash,
            account_hash,
            name,
            symbol,
            total_supply,
            decimals,
        ),
        ExecuteMsg::RemoveBridge { token } => execute_remove_bridge(deps, env, info, token),
        ExecuteMsg::MintErc20Token { token, amount } => {
            execute_mint_erc20_token(deps, env, info, token, amount)
        }

        // Transfers
        ExecuteMsg::TransferToNativeChain {
            token,
            native_recipient,
            amount,
        } => execute_transfer_to_native_chain(deps, env, info, token, native_recipient, amount),
        ExecuteMsg::RevertTransferToNativeChain {
            tx_id,
            token,
            refund_recipient,
            amount,
        } => execute_revert_transfer_to_native_chain(
            deps,
            info,
            tx_id,
            token,
            refund_recipient,
            amount,
        ),
        ExecuteMsg::TransferFromNativeChain {
            tx_hash,
            proof,
            recipient,
        } => execute_transfer_from_native_chain(deps, info, tx_hash, proof, recipient),
        ExecuteMsg::ConfirmTransfer {
            tx_hash,
            token,
            amount,
        } => execute_confirm_transfer(deps, info, tx_hash, token, amount),
        ExecuteMsg::RevertTransferFromNativeChain { tx_hash } => {
            execute_revert_transfer_from_native_chain(deps, info, tx_hash)
        }

        // Owner operations
        ExecuteMsg::SetGovernor { governor } => execute_set_governor(deps, info, governor),
        ExecuteMsg::SetBridgeFee { fee } => execute_set_fee(deps, info, FeeKind::Bridge, fee),
        ExecuteMsg::SetTargetTransferFee { fee } => {
            execute_set_fee(deps, info, FeeKind::TargetTransfer, fee)
        }
        ExecuteMsg::SetNativeTransferFee { fee } => {
            execute_set_fee(deps, info, FeeKind::NativeTransfer, fee)
        }
        ExecuteMsg::WithdrawFee { amount } => execute_withdraw_fee(deps, env, info, amount),
        ExecuteMsg::ProposeOwner { owner } => execute_propose_owner(deps, info, owner),
        ExecuteMsg::AcceptOwner {} => execute_accept_owner(deps, info),
        ExecuteMsg::CancelOwnerProposal {} => execute_cancel_owner_proposal(deps, info),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_TOKEN_REPLY_ID => handle_token_instantiated(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Erc20Token { asset_hash } => {
            to_json_binary(&query_erc20_token(deps, asset_hash)?)
        }
        QueryMsg::AssetHash { token } => to_json_binary(&query_asset_hash(deps, token)?),
        QueryMsg::AccountForAsset { asset_hash } => {
            to_json_binary(&query_account_for_asset(deps, asset_hash)?)
        }
        QueryMsg::BridgedAsset { token } => to_json_binary(&query_bridged_asset(deps, token)?),
        QueryMsg::BridgedAssets { start_after, limit } => {
            to_json_binary(&query_bridged_assets(deps, start_after, limit)?)
        }
        QueryMsg::PendingNativeChainTransfer { tx_id } => {
            to_json_binary(&query_pending_native_chain_transfer(deps, tx_id)?)
        }
        QueryMsg::PendingCrossChainTransfer { tx_hash } => {
            to_json_binary(&query_pending_cross_chain_transfer(deps, tx_hash)?)
        }
        QueryMsg::CollectedFees {} => to_json_binary(&query_collected_fees(deps, env)?),
        QueryMsg::PendingOwner {} => to_json_binary(&query_pending_owner(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
