use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use common::is_valid_native_address;

use crate::error::ContractError;
use crate::msg::{
    AddressResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, MappingEntry, MappingResponse,
    MappingsResponse, MigrateMsg, NativeAddressResponse, QueryMsg, SignatureResponse,
};
use crate::state::{
    Config, ADDRESSES, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, NATIVE_ADDRESSES, SIGNATURES,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };
    CONFIG.save(
        deps.storage,
        &Config {
            admin: admin.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::MapAddress {
            native_address,
            signature,
        } => execute_map_address(deps, info, native_address, signature),
        ExecuteMsg::RemoveMappedAddress { address } => {
            execute_remove_mapped_address(deps, info, address)
        }
        ExecuteMsg::UpdateAdmin { admin } => execute_update_admin(deps, info, admin),
    }
}

fn execute_map_address(
    deps: DepsMut,
    info: MessageInfo,
    native_address: String,
    signature: String,
) -> Result<Response, ContractError> {
    if !is_valid_native_address(&native_address) {
        return Err(ContractError::InvalidNativeAddress { native_address });
    }

    if NATIVE_ADDRESSES.has(deps.storage, &info.sender) {
        return Err(ContractError::AddressAlreadyMapped {
            address: info.sender.to_string(),
        });
    }
    if ADDRESSES.has(deps.storage, &native_address) {
        return Err(ContractError::NativeAddressAlreadyMapped { native_address });
    }

    NATIVE_ADDRESSES.save(deps.storage, &info.sender, &native_address)?;
    ADDRESSES.save(deps.storage, &native_address, &info.sender)?;
    SIGNATURES.save(deps.storage, &native_address, &signature)?;

    Ok(Response::new()
        .add_attribute("action", "map_address")
        .add_attribute("address", info.sender)
        .add_attribute("native_address", native_address)
        .add_attribute("signature", signature))
}

fn execute_remove_mapped_address(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let addr = deps.api.addr_validate(&address)?;
    let native_address = NATIVE_ADDRESSES
        .may_load(deps.storage, &addr)?
        .ok_or(ContractError::AddressNotMapped { address })?;

    NATIVE_ADDRESSES.remove(deps.storage, &addr);
    ADDRESSES.remove(deps.storage, &native_address);
    SIGNATURES.remove(deps.storage, &native_address);

    Ok(Response::new()
        .add_attribute("action", "remove_mapped_address")
        .add_attribute("address", addr)
        .add_attribute("native_address", native_address))
}

fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.admin = deps.api.addr_validate(&admin)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_admin")
        .add_attribute("admin", config.admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::NativeAddress { address } => {
            to_json_binary(&query_native_address(deps, address)?)
        }
        QueryMsg::Address { native_address } => {
            to_json_binary(&query_address(deps, native_address)?)
        }
        QueryMsg::Signature { native_address } => {
            to_json_binary(&query_signature(deps, native_address)?)
        }
        QueryMsg::Mapping { address } => to_json_binary(&query_mapping(deps, address)?),
        QueryMsg::Mappings { start_after, limit } => {
            to_json_binary(&query_mappings(deps, start_after, limit)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
    })
}

fn query_native_address(deps: Deps, address: String) -> StdResult<NativeAddressResponse> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(NativeAddressResponse {
        native_address: NATIVE_ADDRESSES.may_load(deps.storage, &addr)?,
    })
}

fn query_address(deps: Deps, native_address: String) -> StdResult<AddressResponse> {
    Ok(AddressResponse {
        address: ADDRESSES.may_load(deps.storage, &native_address)?,
    })
}

fn query_signature(deps: Deps, native_address: String) -> StdResult<SignatureResponse> {
    Ok(SignatureResponse {
        signature: SIGNATURES.may_load(deps.storage, &native_address)?,
    })
}

fn query_mapping(deps: Deps, address: String) -> StdResult<MappingResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let mapping = match NATIVE_ADDRESSES.may_load(deps.storage, &addr)? {
        Some(native_address) => Some(load_entry(deps, addr, native_address)?),
        None => None,
    };
    Ok(MappingResponse { mapping })
}

fn query_mappings(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<MappingsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let mappings = NATIVE_ADDRESSES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (addr, native_address) = item?;
            load_entry(deps, addr, native_address)
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(MappingsResponse { mappings })
}

fn load_entry(
    deps: Deps,
    address: cosmwasm_std::Addr,
    native_address: String,
) -> StdResult<MappingEntry> {
    let signature = SIGNATURES
        .may_load(deps.storage, &native_address)?
        .unwrap_or_default();
    Ok(MappingEntry {
        address,
        native_address,
        signature,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
