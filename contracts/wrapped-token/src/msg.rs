use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Expiration, MinterResponse, TokenInfoResponse};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Address mapping registry
    pub mapping_contract: String,
    /// Owner (defaults to the instantiator)
    pub owner: Option<String>,
    /// Defaults to 1,000 whole tokens
    pub min_wrap_amount: Option<Uint128>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Holder Operations
    // ========================================================================
    /// Transfer tokens. A transfer to the token contract itself is an unwrap
    /// request and requires the sender to be mapped.
    Transfer { recipient: String, amount: Uint128 },

    /// Transfer tokens using an allowance. A transfer to the token contract
    /// itself is an unwrap request on behalf of `owner`.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    /// Send tokens to a contract with a hook message
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    /// Send tokens to a contract using an allowance
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    // ========================================================================
    // Owner Operations
    // ========================================================================
    /// Mint `amount` to the address mapped to `native_address`.
    ///
    /// Authorization: Owner only
    Wrap {
        native_address: String,
        amount: Uint128,
    },

    /// Burn pending unwrap tokens once the native chain payout completed.
    ///
    /// Authorization: Owner only
    BurnUnwrappedTokens {
        native_address: String,
        amount: Uint128,
    },

    /// Return `revert_amount` of a pending unwrap to its holder and burn `fee_amount`.
    ///
    /// Authorization: Owner only
    RevertUnwrappedTokens {
        native_address: String,
        revert_amount: Uint128,
        fee_amount: Uint128,
    },

    /// Authorization: Owner only
    SetMinWrapAmount { amount: Uint128 },

    /// Move stray CW20 tokens held by this contract. Fails for this token.
    ///
    /// Authorization: Owner only
    RecoverToken {
        token: String,
        recipient: String,
        amount: Uint128,
    },

    /// Authorization: Owner only
    UpdateOwner { owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(TokenInfoResponse)]
    TokenInfo {},

    #[returns(Option<MinterResponse>)]
    Minter {},

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    #[returns(ConfigResponse)]
    Config {},

    #[returns(MinWrapAmountResponse)]
    MinWrapAmount {},

    #[returns(PendingUnwrapBalanceResponse)]
    PendingUnwrapBalance { address: String },

    #[returns(CapResponse)]
    Cap {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub mapping_contract: Addr,
    pub min_wrap_amount: Uint128,
}

#[cw_serde]
pub struct MinWrapAmountResponse {
    pub min_wrap_amount: Uint128,
}

#[cw_serde]
pub struct PendingUnwrapBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct CapResponse {
    pub cap: Uint128,
}
