//! Asset binding handlers (BridgeErc20Token, BridgeAsset, RemoveBridge, MintErc20Token).

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, DepsMut, Env, Event, MessageInfo, QuerierWrapper, Reply,
    Response, StdError, StdResult, Storage, SubMsg, Uint128, WasmMsg,
};
use cw20::{
    BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse, TokenInfoResponse,
};

use super::{ensure_fee_paid, ensure_governor, ensure_not_empty};
use crate::error::ContractError;
use crate::state::{
    PendingBridge, ACCOUNTS_FOR_ASSETS, ASSET_HASHES, DEFAULT_DECIMALS, ERC20_TOKENS,
    INSTANTIATE_TOKEN_REPLY_ID, MINTABLE_TOKENS, PENDING_BRIDGE,
};

fn query_token_balance(
    querier: &QuerierWrapper,
    token: &Addr,
    address: &Addr,
) -> StdResult<Uint128> {
    let res: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: address.to_string(),
        },
    )?;
    Ok(res.balance)
}

fn query_total_supply(querier: &QuerierWrapper, token: &Addr) -> StdResult<Uint128> {
    let res: TokenInfoResponse = querier.query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})?;
    Ok(res.total_supply)
}

fn ensure_asset_unbridged(storage: &dyn Storage, asset_hash: &str) -> Result<(), ContractError> {
    if ERC20_TOKENS.has(storage, asset_hash) {
        return Err(ContractError::AssetAlreadyBridged {
            asset_hash: asset_hash.to_string(),
        });
    }
    Ok(())
}

fn save_bridged_asset(
    storage: &mut dyn Storage,
    token: &Addr,
    asset_hash: &str,
    account_hash: &str,
) -> StdResult<()> {
    ERC20_TOKENS.save(storage, asset_hash, token)?;
    ASSET_HASHES.save(storage, token, &asset_hash.to_string())?;
    ACCOUNTS_FOR_ASSETS.save(storage, asset_hash, &account_hash.to_string())
}

// ============================================================================
// BridgeErc20Token
// ============================================================================

/// Bind an existing CW20 token to a native chain asset.
pub fn execute_bridge_erc20_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    asset_hash: String,
    account_hash: String,
) -> Result<Response, ContractError> {
    let config = ensure_governor(deps.storage, &info.sender)?;
    let paid = ensure_fee_paid(&info, &config, config.bridge_fee)?;
    ensure_not_empty(&asset_hash, "asset_hash")?;
    ensure_not_empty(&account_hash, "account_hash")?;

    let token_addr = deps.api.addr_validate(&token)?;
    ensure_asset_unbridged(deps.storage, &asset_hash)?;
    if ASSET_HASHES.has(deps.storage, &token_addr) {
        return Err(ContractError::TokenAlreadyBridged { token });
    }

    // Existing custody would make the removal check meaningless
    let balance = query_token_balance(&deps.querier, &token_addr, &env.contract.address)?;
    if !balance.is_zero() {
        return Err(ContractError::BridgeHoldsToken { token, balance });
    }

    save_bridged_asset(deps.storage, &token_addr, &asset_hash, &account_hash)?;

    Ok(Response::new()
        .add_attribute("action", "bridge_erc20_token")
        .add_attribute("token", token_addr)
        .add_attribute("asset_hash", asset_hash)
        .add_attribute("account_hash", account_hash)
        .add_attribute("fee_paid", paid))
}

// ============================================================================
// BridgeAsset
// ============================================================================

/// Instantiate a new CW20 token for a native chain asset.
///
/// The bridge receives the whole initial supply and stays the minter. The
/// asset is bound in [`handle_token_instantiated`] once the address is known.
#[allow(clippy::too_many_arguments)]
pub fn execute_bridge_asset(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset_hash: String,
    account_hash: String,
    name: String,
    symbol: String,
    total_supply: Uint128,
    decimals: Option<u8>,
) -> Result<Response, ContractError> {
    let config = ensure_governor(deps.storage, &info.sender)?;
    let paid = ensure_fee_paid(&info, &config, config.bridge_fee)?;
    ensure_not_empty(&asset_hash, "asset_hash")?;
    ensure_not_empty(&account_hash, "account_hash")?;
    ensure_asset_unbridged(deps.storage, &asset_hash)?;

    let bridge = env.contract.address.to_string();
    let token_msg = cw20_base::msg::InstantiateMsg {
        name: name.clone(),
        symbol: symbol.clone(),
        decimals: decimals.unwrap_or(DEFAULT_DECIMALS),
        initial_balances: vec![Cw20Coin {
            address: bridge.clone(),
            amount: total_supply,
        }],
        mint: Some(MinterResponse {
            minter: bridge.clone(),
            cap: None,
        }),
        marketing: None,
    };

    PENDING_BRIDGE.save(
        deps.storage,
        &PendingBridge {
            asset_hash: asset_hash.clone(),
            account_hash: account_hash.clone(),
        },
    )?;

    let instantiate = WasmMsg::Instantiate {
        admin: Some(bridge),
        code_id: config.token_code_id,
        msg: to_json_binary(&token_msg)?,
        funds: vec![],
        label: format!("bridged asset {}", symbol),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(
            instantiate,
            INSTANTIATE_TOKEN_REPLY_ID,
        ))
        .add_attribute("action", "bridge_asset")
        .add_attribute("asset_hash", asset_hash)
        .add_attribute("account_hash", account_hash)
        .add_attribute("name", name)
        .add_attribute("symbol", symbol)
        .add_attribute("total_supply", total_supply)
        .add_attribute("fee_paid", paid))
}

/// Address of the contract created by an instantiate sub-message.
fn instantiated_contract_address(events: &[Event]) -> Option<String> {
    events
        .iter()
        .filter(|event| event.ty == "instantiate")
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == "_contract_address")
        .map(|attr| attr.value.clone())
}

/// Reply handler for the token instantiated by `BridgeAsset`.
pub fn handle_token_instantiated(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let result = msg.result.into_result().map_err(StdError::generic_err)?;
    let token = instantiated_contract_address(&result.events)
        .ok_or(ContractError::MissingContractAddress)?;
    let token_addr = deps.api.addr_validate(&token)?;

    let pending = PENDING_BRIDGE.load(deps.storage)?;
    PENDING_BRIDGE.remove(deps.storage);

    save_bridged_asset(
        deps.storage,
        &token_addr,
        &pending.asset_hash,
        &pending.account_hash,
    )?;
    MINTABLE_TOKENS.save(deps.storage, &token_addr, &true)?;

    Ok(Response::new()
        .add_attribute("action", "bridge_asset_created")
        .add_attribute("token", token_addr)
        .add_attribute("asset_hash", pending.asset_hash)
        .add_attribute("account_hash", pending.account_hash))
}

// ============================================================================
// RemoveBridge
// ============================================================================

/// Unbind a token from its asset.
///
/// Custody must not be split: the bridge holds either the whole supply or
/// nothing of it.
pub fn execute_remove_bridge(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    ensure_governor(deps.storage, &info.sender)?;

    let token_addr = deps.api.addr_validate(&token)?;
    let asset_hash = ASSET_HASHES
        .may_load(deps.storage, &token_addr)?
        .ok_or(ContractError::TokenNotBridged { token })?;

    let balance = query_token_balance(&deps.querier, &token_addr, &env.contract.address)?;
    let total_supply = query_total_supply(&deps.querier, &token_addr)?;
    if !balance.is_zero() && balance != total_supply {
        return Err(ContractError::SplitCustody {
            balance,
            total_supply,
        });
    }

    ERC20_TOKENS.remove(deps.storage, &asset_hash);
    ASSET_HASHES.remove(deps.storage, &token_addr);
    ACCOUNTS_FOR_ASSETS.remove(deps.storage, &asset_hash);
    MINTABLE_TOKENS.remove(deps.storage, &token_addr);

    Ok(Response::new()
        .add_attribute("action", "remove_bridge")
        .add_attribute("token", token_addr)
        .add_attribute("asset_hash", asset_hash)
        .add_attribute("bridge_balance", balance)
        .add_attribute("total_supply", total_supply))
}

// ============================================================================
// MintErc20Token
// ============================================================================

/// Mint additional supply of a bridge-created token into bridge custody.
pub fn execute_mint_erc20_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_governor(deps.storage, &info.sender)?;

    let token_addr = deps.api.addr_validate(&token)?;
    if !MINTABLE_TOKENS.has(deps.storage, &token_addr) {
        return Err(ContractError::NotMintable { token });
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "mint_erc20_token")
        .add_attribute("token", token_addr)
        .add_attribute("amount", amount))
}
