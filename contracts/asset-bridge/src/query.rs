//! Query handlers for the asset bridge contract.

use cosmwasm_std::{Addr, Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    AccountForAssetResponse, AssetHashResponse, BridgedAssetInfo, BridgedAssetResponse,
    BridgedAssetsResponse, CollectedFeesResponse, ConfigResponse, Erc20TokenResponse,
    PendingCrossChainTransferResponse, PendingNativeChainTransferResponse, PendingOwnerResponse,
};
use crate::state::{
    ACCOUNTS_FOR_ASSETS, ASSET_HASHES, CONFIG, ERC20_TOKENS, MINTABLE_TOKENS,
    PENDING_CROSS_CHAIN_TRANSFERS, PENDING_NATIVE_TRANSFERS, PENDING_OWNER,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

// ============================================================================
// Config Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        governor: config.governor,
        token_code_id: config.token_code_id,
        fee_denom: config.fee_denom,
        bridge_fee: config.bridge_fee,
        target_transfer_fee: config.target_transfer_fee,
        native_transfer_fee: config.native_transfer_fee,
    })
}

pub fn query_pending_owner(deps: Deps) -> StdResult<PendingOwnerResponse> {
    Ok(PendingOwnerResponse {
        pending_owner: PENDING_OWNER.may_load(deps.storage)?,
    })
}

/// Fee denom balance of the bridge, all of which the owner may withdraw.
pub fn query_collected_fees(deps: Deps, env: Env) -> StdResult<CollectedFeesResponse> {
    let config = CONFIG.load(deps.storage)?;
    let fees = deps
        .querier
        .query_balance(&env.contract.address, config.fee_denom)?;
    Ok(CollectedFeesResponse { fees })
}

// ============================================================================
// Bridged Asset Queries
// ============================================================================

pub fn query_erc20_token(deps: Deps, asset_hash: String) -> StdResult<Erc20TokenResponse> {
    Ok(Erc20TokenResponse {
        token: ERC20_TOKENS.may_load(deps.storage, &asset_hash)?,
    })
}

pub fn query_asset_hash(deps: Deps, token: String) -> StdResult<AssetHashResponse> {
    let token = deps.api.addr_validate(&token)?;
    Ok(AssetHashResponse {
        asset_hash: ASSET_HASHES.may_load(deps.storage, &token)?,
    })
}

pub fn query_account_for_asset(
    deps: Deps,
    asset_hash: String,
) -> StdResult<AccountForAssetResponse> {
    Ok(AccountForAssetResponse {
        account_hash: ACCOUNTS_FOR_ASSETS.may_load(deps.storage, &asset_hash)?,
    })
}

fn load_bridged_asset(deps: Deps, token: Addr, asset_hash: String) -> StdResult<BridgedAssetInfo> {
    let account_hash = ACCOUNTS_FOR_ASSETS.load(deps.storage, &asset_hash)?;
    let mintable = MINTABLE_TOKENS.has(deps.storage, &token);
    Ok(BridgedAssetInfo {
        token,
        asset_hash,
        account_hash,
        mintable,
    })
}

pub fn query_bridged_asset(deps: Deps, token: String) -> StdResult<BridgedAssetResponse> {
    let token = deps.api.addr_validate(&token)?;
    let asset = match ASSET_HASHES.may_load(deps.storage, &token)? {
        Some(asset_hash) => Some(load_bridged_asset(deps, token, asset_hash)?),
        None => None,
    };
    Ok(BridgedAssetResponse { asset })
}

/// Bridged assets ordered by token address.
pub fn query_bridged_assets(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<BridgedAssetsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after
        .map(|token| deps.api.addr_validate(&token))
        .transpose()?;
    let start = start_after.as_ref().map(Bound::exclusive);

    let assets = ASSET_HASHES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (token, asset_hash) = item?;
            load_bridged_asset(deps, token, asset_hash)
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(BridgedAssetsResponse { assets })
}

// ============================================================================
// Pending Transfer Queries
// ============================================================================

pub fn query_pending_native_chain_transfer(
    deps: Deps,
    tx_id: String,
) -> StdResult<PendingNativeChainTransferResponse> {
    Ok(PendingNativeChainTransferResponse {
        transfer: PENDING_NATIVE_TRANSFERS.may_load(deps.storage, &tx_id)?,
    })
}

pub fn query_pending_cross_chain_transfer(
    deps: Deps,
    tx_hash: String,
) -> StdResult<PendingCrossChainTransferResponse> {
    Ok(PendingCrossChainTransferResponse {
        transfer: PENDING_CROSS_CHAIN_TRANSFERS.may_load(deps.storage, &tx_hash)?,
    })
}
