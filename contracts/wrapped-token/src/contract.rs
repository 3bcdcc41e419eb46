use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo,
    Response, StdError, StdResult, Storage, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{Cw20ExecuteMsg, MinterResponse};
use cw20_base::allowances::{
    execute_decrease_allowance, execute_increase_allowance, execute_send_from,
    execute_transfer_from, query_allowance,
};
use cw20_base::contract::{
    execute_burn, execute_mint, execute_send, execute_transfer, query_balance, query_minter,
    query_token_info,
};

use common::{query_mapped_address, query_native_address};

use crate::error::ContractError;
use crate::msg::{
    CapResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, MinWrapAmountResponse,
    PendingUnwrapBalanceResponse, QueryMsg,
};
use crate::state::{
    Config, CAP, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DECIMALS, DEFAULT_MIN_WRAP_AMOUNT,
    PENDING_UNWRAP, UNWRAP_REQUESTERS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // The contract is its own minter; the owner mints through Wrap.
    let token_msg = cw20_base::msg::InstantiateMsg {
        name: msg.name.clone(),
        symbol: msg.symbol.clone(),
        decimals: DECIMALS,
        initial_balances: vec![],
        mint: Some(MinterResponse {
            minter: env.contract.address.to_string(),
            cap: Some(Uint128::new(CAP)),
        }),
        marketing: None,
    };
    cw20_base::contract::instantiate(deps.branch(), env, info.clone(), token_msg)?;

    // cw20-base records its own version, ours overrides it
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };
    let config = Config {
        owner,
        mapping_contract: deps.api.addr_validate(&msg.mapping_contract)?,
        min_wrap_amount: msg
            .min_wrap_amount
            .unwrap_or(Uint128::new(DEFAULT_MIN_WRAP_AMOUNT)),
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("owner", config.owner)
        .add_attribute("mapping_contract", config.mapping_contract)
        .add_attribute("min_wrap_amount", config.min_wrap_amount))
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
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_wrapped_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_wrapped_transfer_from(deps, env, info, owner, recipient, amount),
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => {
            reject_send_to_self(deps.as_ref(), &env, &contract)?;
            Ok(execute_send(deps, env, info, contract, amount, msg)?)
        }
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => {
            reject_send_to_self(deps.as_ref(), &env, &contract)?;
            Ok(execute_send_from(deps, env, info, owner, contract, amount, msg)?)
        }
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),

        ExecuteMsg::Wrap {
            native_address,
            amount,
        } => execute_wrap(deps, env, info, native_address, amount),
        ExecuteMsg::BurnUnwrappedTokens {
            native_address,
            amount,
        } => execute_burn_unwrapped(deps, env, info, native_address, amount),
        ExecuteMsg::RevertUnwrappedTokens {
            native_address,
            revert_amount,
            fee_amount,
        } => execute_revert_unwrapped(deps, env, info, native_address, revert_amount, fee_amount),
        ExecuteMsg::SetMinWrapAmount { amount } => execute_set_min_wrap_amount(deps, info, amount),
        ExecuteMsg::RecoverToken {
            token,
            recipient,
            amount,
        } => execute_recover_token(deps, env, info, token, recipient, amount),
        ExecuteMsg::UpdateOwner { owner } => execute_update_owner(deps, info, owner),
    }
}

// ============================================================================
// Transfers and Unwrap Requests
// ============================================================================

fn execute_wrapped_transfer(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    if recipient_addr != env.contract.address {
        return Ok(execute_transfer(deps, env, info, recipient, amount)?);
    }

    let holder = info.sender.clone();
    let native_address = check_unwrap_request(deps.as_ref(), &holder, amount)?;
    let res = execute_transfer(deps.branch(), env, info, recipient, amount)?;
    let pending = record_unwrap_request(deps.storage, &holder, &native_address, amount)?;

    Ok(res
        .add_attribute("unwrap_native_address", native_address)
        .add_attribute("pending_unwrap", pending))
}

fn execute_wrapped_transfer_from(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    if recipient_addr != env.contract.address {
        return Ok(execute_transfer_from(
            deps, env, info, owner, recipient, amount,
        )?);
    }

    let holder = deps.api.addr_validate(&owner)?;
    let native_address = check_unwrap_request(deps.as_ref(), &holder, amount)?;
    let res = execute_transfer_from(deps.branch(), env, info, owner, recipient, amount)?;
    let pending = record_unwrap_request(deps.storage, &holder, &native_address, amount)?;

    Ok(res
        .add_attribute("unwrap_native_address", native_address)
        .add_attribute("pending_unwrap", pending))
}

/// A deposit to self is honored only for mapped holders and large enough amounts.
/// Returns the holder's native address.
fn check_unwrap_request(
    deps: Deps,
    holder: &Addr,
    amount: Uint128,
) -> Result<String, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let native_address = query_native_address(&deps.querier, &config.mapping_contract, holder)?
        .ok_or_else(|| ContractError::AddressNotMapped {
            address: holder.to_string(),
        })?;

    if amount < config.min_wrap_amount {
        return Err(ContractError::BelowMinWrapAmount {
            min_amount: config.min_wrap_amount,
        });
    }

    Ok(native_address)
}

fn record_unwrap_request(
    storage: &mut dyn Storage,
    holder: &Addr,
    native_address: &str,
    amount: Uint128,
) -> StdResult<Uint128> {
    let pending = PENDING_UNWRAP.update(storage, holder, |pending| -> StdResult<_> {
        Ok(pending.unwrap_or_default().checked_add(amount)?)
    })?;
    UNWRAP_REQUESTERS.save(storage, native_address, holder)?;
    Ok(pending)
}

fn reject_send_to_self(deps: Deps, env: &Env, contract: &str) -> Result<(), ContractError> {
    if deps.api.addr_validate(contract)? == env.contract.address {
        return Err(ContractError::SendToSelf);
    }
    Ok(())
}

// ============================================================================
// Owner Operations
// ============================================================================

fn ensure_owner(storage: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if *sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

/// The contract acts on its own balance and as its own minter.
fn self_info(env: &Env) -> MessageInfo {
    MessageInfo {
        sender: env.contract.address.clone(),
        funds: vec![],
    }
}

fn execute_wrap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    native_address: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = ensure_owner(deps.storage, &info.sender)?;

    let recipient = query_mapped_address(&deps.querier, &config.mapping_contract, &native_address)?
        .ok_or_else(|| ContractError::NativeAddressNotMapped {
            native_address: native_address.clone(),
        })?;

    // cw20-base enforces the cap
    let minter = self_info(&env);
    execute_mint(deps, env, minter, recipient.to_string(), amount)?;

    Ok(Response::new()
        .add_attribute("action", "wrap")
        .add_attribute("native_address", native_address)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

/// Holder that `native_address` resolves to, and its pending balance.
///
/// The registry decides while the native address is mapped. An unmapped
/// address falls back to the holder of its latest unwrap request.
fn load_unwrap_request(
    deps: Deps,
    native_address: &str,
) -> Result<(Addr, Uint128), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mapped = query_mapped_address(&deps.querier, &config.mapping_contract, native_address)?;
    let holder = match mapped {
        Some(holder) => holder,
        None => UNWRAP_REQUESTERS
            .may_load(deps.storage, native_address)?
            .ok_or_else(|| ContractError::NoUnwrapRequest {
                native_address: native_address.to_string(),
            })?,
    };
    let pending = PENDING_UNWRAP
        .may_load(deps.storage, &holder)?
        .unwrap_or_default();
    Ok((holder, pending))
}

fn execute_burn_unwrapped(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    native_address: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let (holder, pending) = load_unwrap_request(deps.as_ref(), &native_address)?;
    if amount > pending {
        return Err(ContractError::InsufficientPendingUnwrap {
            requested: amount,
            pending,
        });
    }

    let burner = self_info(&env);
    execute_burn(deps.branch(), env, burner, amount)?;

    let remaining = pending - amount;
    PENDING_UNWRAP.save(deps.storage, &holder, &remaining)?;

    Ok(Response::new()
        .add_attribute("action", "burn_unwrapped_tokens")
        .add_attribute("native_address", native_address)
        .add_attribute("holder", holder)
        .add_attribute("amount", amount)
        .add_attribute("pending_unwrap", remaining))
}

fn execute_revert_unwrapped(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    native_address: String,
    revert_amount: Uint128,
    fee_amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let (holder, pending) = load_unwrap_request(deps.as_ref(), &native_address)?;
    let total = revert_amount
        .checked_add(fee_amount)
        .map_err(StdError::from)?;
    if total.is_zero() {
        return Err(cw20_base::ContractError::InvalidZeroAmount {}.into());
    }
    if total > pending {
        return Err(ContractError::InsufficientPendingUnwrap {
            requested: total,
            pending,
        });
    }

    if !revert_amount.is_zero() {
        execute_transfer(
            deps.branch(),
            env.clone(),
            self_info(&env),
            holder.to_string(),
            revert_amount,
        )?;
    }
    if !fee_amount.is_zero() {
        execute_burn(deps.branch(), env.clone(), self_info(&env), fee_amount)?;
    }

    let remaining = pending - total;
    PENDING_UNWRAP.save(deps.storage, &holder, &remaining)?;

    Ok(Response::new()
        .add_attribute("action", "revert_unwrapped_tokens")
        .add_attribute("native_address", native_address)
        .add_attribute("holder", holder)
        .add_attribute("revert_amount", revert_amount)
        .add_attribute("fee_amount", fee_amount)
        .add_attribute("pending_unwrap", remaining))
}

fn execute_set_min_wrap_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info.sender)?;
    config.min_wrap_amount = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_min_wrap_amount")
        .add_attribute("min_wrap_amount", amount))
}

/// Recover CW20 tokens sent to this contract by mistake.
///
/// The wrapped token itself is excluded: its balance here is pending unwraps,
/// settled only through burn or revert.
fn execute_recover_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let token_addr = deps.api.addr_validate(&token)?;
    if token_addr == env.contract.address {
        return Err(ContractError::CannotRecoverOwnToken);
    }
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient_addr.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "recover_token")
        .add_attribute("token", token_addr)
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", amount))
}

fn execute_update_owner(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info.sender)?;
    config.owner = deps.api.addr_validate(&owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_owner")
        .add_attribute("owner", config.owner))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Minter {} => to_json_binary(&query_minter(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::MinWrapAmount {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&MinWrapAmountResponse {
                min_wrap_amount: config.min_wrap_amount,
            })
        }
        QueryMsg::PendingUnwrapBalance { address } => {
            to_json_binary(&query_pending_unwrap_balance(deps, address)?)
        }
        QueryMsg::Cap {} => to_json_binary(&CapResponse {
            cap: Uint128::new(CAP),
        }),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        mapping_contract: config.mapping_contract,
        min_wrap_amount: config.min_wrap_amount,
    })
}

fn query_pending_unwrap_balance(
    deps: Deps,
    address: String,
) -> StdResult<PendingUnwrapBalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = PENDING_UNWRAP
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(PendingUnwrapBalanceResponse { balance })
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
