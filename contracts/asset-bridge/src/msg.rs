//! Message types for the asset bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Uint128};

use crate::state::{CrossChainTransfer, NativeChainTransfer};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Governor address (defaults to the instantiator, who is the owner)
    pub governor: Option<String>,
    /// cw20-base code id used to create new wrapped assets
    pub token_code_id: u64,
    /// Bank denom fees are paid in
    pub fee_denom: String,
    pub bridge_fee: Uint128,
    pub target_transfer_fee: Uint128,
    pub native_transfer_fee: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Asset Management (Governor)
    // ========================================================================
    /// Bridge an existing CW20 token to a native chain asset.
    /// Requires the bridge fee attached and no balance of the token in the bridge.
    BridgeErc20Token {
        token: String,
        asset_hash: String,
        account_hash: String,
    },

    /// Create a new CW20 token for a native chain asset with the whole
    /// supply held by the bridge. Requires the bridge fee attached.
    BridgeAsset {
        asset_hash: String,
        account_hash: String,
        name: String,
        symbol: String,
        total_supply: Uint128,
        /// Defaults to 18
        decimals: Option<u8>,
    },

    /// Unbind a token. Only allowed when the bridge holds all or none of its supply.
    RemoveBridge { token: String },

    /// Mint additional supply of a bridge-created token into bridge custody.
    MintErc20Token { token: String, amount: Uint128 },

    // ========================================================================
    // Transfers
    // ========================================================================
    /// Move tokens into bridge custody for delivery on the native chain.
    /// Requires an allowance for the bridge and the native transfer fee attached.
    TransferToNativeChain {
        token: String,
        native_recipient: String,
        amount: Uint128,
    },

    /// Refund a transfer to the native chain that was not delivered.
    ///
    /// Authorization: Governor only
    RevertTransferToNativeChain {
        tx_id: String,
        token: String,
        refund_recipient: String,
        amount: Uint128,
    },

    /// Claim a native chain deposit for `recipient`.
    /// Requires the target transfer fee attached.
    TransferFromNativeChain {
        tx_hash: String,
        proof: String,
        recipient: String,
    },

    /// Release tokens for a claimed native chain deposit.
    ///
    /// Authorization: Governor only
    ConfirmTransfer {
        tx_hash: String,
        token: String,
        amount: Uint128,
    },

    /// Drop an invalid claim without paying out.
    ///
    /// Authorization: Governor only
    RevertTransferFromNativeChain { tx_hash: String },

    // ========================================================================
    // Owner Operations
    // ========================================================================
    SetGovernor { governor: String },
    SetBridgeFee { fee: Uint128 },
    SetTargetTransferFee { fee: Uint128 },
    SetNativeTransferFee { fee: Uint128 },

    /// Send collected fees to the owner
    WithdrawFee { amount: Uint128 },

    /// Propose a new owner (must be accepted)
    ProposeOwner { owner: String },

    /// Accept a pending ownership proposal
    AcceptOwner {},

    CancelOwnerProposal {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Token bound to an asset hash
    #[returns(Erc20TokenResponse)]
    Erc20Token { asset_hash: String },

    /// Asset hash bound to a token
    #[returns(AssetHashResponse)]
    AssetHash { token: String },

    /// Native chain custodial account of an asset
    #[returns(AccountForAssetResponse)]
    AccountForAsset { asset_hash: String },

    #[returns(BridgedAssetResponse)]
    BridgedAsset { token: String },

    #[returns(BridgedAssetsResponse)]
    BridgedAssets {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(PendingNativeChainTransferResponse)]
    PendingNativeChainTransfer { tx_id: String },

    #[returns(PendingCrossChainTransferResponse)]
    PendingCrossChainTransfer { tx_hash: String },

    /// Fee denom balance held by the bridge
    #[returns(CollectedFeesResponse)]
    CollectedFees {},

    #[returns(PendingOwnerResponse)]
    PendingOwner {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub governor: Addr,
    pub token_code_id: u64,
    pub fee_denom: String,
    pub bridge_fee: Uint128,
    pub target_transfer_fee: Uint128,
    pub native_transfer_fee: Uint128,
}

#[cw_serde]
pub struct Erc20TokenResponse {
    pub token: Option<Addr>,
}

#[cw_serde]
pub struct AssetHashResponse {
    pub asset_hash: Option<String>,
}

#[cw_serde]
pub struct AccountForAssetResponse {
    pub account_hash: Option<String>,
}

#[cw_serde]
pub struct BridgedAssetInfo {
    pub token: Addr,
    pub asset_hash: String,
    pub account_hash: String,
    /// Created by the bridge through `BridgeAsset`
    pub mintable: bool,
}

#[cw_serde]
pub struct BridgedAssetResponse {
    pub asset: Option<BridgedAssetInfo>,
}

#[cw_serde]
pub struct BridgedAssetsResponse {
    pub assets: Vec<BridgedAssetInfo>,
}

#[cw_serde]
pub struct PendingNativeChainTransferResponse {
    pub transfer: Option<NativeChainTransfer>,
}

#[cw_serde]
pub struct PendingCrossChainTransferResponse {
    pub transfer: Option<CrossChainTransfer>,
}

#[cw_serde]
pub struct CollectedFeesResponse {
    pub fees: Coin,
}

#[cw_serde]
pub struct PendingOwnerResponse {
    pub pending_owner: Option<Addr>,
}
