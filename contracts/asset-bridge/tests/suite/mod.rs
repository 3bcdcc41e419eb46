//! Shared cw-multi-test setup for the asset bridge integration tests.

#![allow(dead_code)]

use cosmwasm_std::{coins, Addr, Coin, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, TokenInfoResponse};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use asset_bridge::msg::{
    AccountForAssetResponse, AssetHashResponse, CollectedFeesResponse, Erc20TokenResponse,
    ExecuteMsg, InstantiateMsg, PendingCrossChainTransferResponse,
    PendingNativeChainTransferResponse, QueryMsg,
};
use asset_bridge::state::{CrossChainTransfer, NativeChainTransfer};

pub const DENOM: &str = "uluna";
pub const BRIDGE_FEE: u128 = 1_000_000_000_000_000_000;
pub const TARGET_TRANSFER_FEE: u128 = 2_000_000_000_000_000_000;
pub const NATIVE_TRANSFER_FEE: u128 = 2_000_000_000_000_000_000;
const INITIAL_FUNDS: u128 = 1_000_000_000_000_000_000_000;

pub const NATIVE_RECIPIENT: &str = "CH111111111111111111111111111111111";

// ============================================================================
// Test Setup
// ============================================================================

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        asset_bridge::contract::execute,
        asset_bridge::contract::instantiate,
        asset_bridge::contract::query,
    )
    .with_reply(asset_bridge::contract::reply);
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub struct Suite {
    pub app: App,
    pub bridge: Addr,
    pub cw20_code_id: u64,
    pub owner: Addr,
    pub governor: Addr,
    pub user: Addr,
}

pub fn setup() -> Suite {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let governor = Addr::unchecked("terra1governor");
    let user = Addr::unchecked("terra1user");

    app.init_modules(|router, _, storage| {
        for addr in [&owner, &governor, &user] {
            router
                .bank
                .init_balance(storage, addr, coins(INITIAL_FUNDS, DENOM))
                .unwrap();
        }
    });

    let cw20_code_id = app.store_code(contract_cw20());
    let bridge_code_id = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code_id,
            owner.clone(),
            &InstantiateMsg {
                governor: Some(governor.to_string()),
                token_code_id: cw20_code_id,
                fee_denom: DENOM.to_string(),
                bridge_fee: Uint128::new(BRIDGE_FEE),
                target_transfer_fee: Uint128::new(TARGET_TRANSFER_FEE),
                native_transfer_fee: Uint128::new(NATIVE_TRANSFER_FEE),
            },
            &[],
            "asset-bridge",
            Some(owner.to_string()),
        )
        .unwrap();

    Suite {
        app,
        bridge,
        cw20_code_id,
        owner,
        governor,
        user,
    }
}

pub fn err_string(res: anyhow::Result<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}

/// Value of a `wasm` event attribute emitted during execution.
pub fn wasm_attr(res: &AppResponse, key: &str) -> String {
    res.events
        .iter()
        .filter(|event| event.ty == "wasm")
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.clone())
        .unwrap()
}

impl Suite {
    // ========================================================================
    // Execution
    // ========================================================================

    pub fn exec(
        &mut self,
        sender: &Addr,
        msg: &ExecuteMsg,
        funds: &[Coin],
    ) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.bridge.clone(), msg, funds)
    }

    /// Existing CW20 token with `amount` held by `holder`.
    pub fn create_cw20(&mut self, holder: &Addr, amount: u128) -> Addr {
        self.app
            .instantiate_contract(
                self.cw20_code_id,
                self.owner.clone(),
                &cw20_base::msg::InstantiateMsg {
                    name: "Existing Token".to_string(),
                    symbol: "EXT".to_string(),
                    decimals: 6,
                    initial_balances: vec![Cw20Coin {
                        address: holder.to_string(),
                        amount: Uint128::new(amount),
                    }],
                    mint: None,
                    marketing: None,
                },
                &[],
                "existing-token",
                None,
            )
            .unwrap()
    }

    pub fn bridge_erc20(
        &mut self,
        token: &Addr,
        asset_hash: &str,
        account_hash: &str,
    ) -> anyhow::Result<AppResponse> {
        let governor = self.governor.clone();
        self.exec(
            &governor,
            &ExecuteMsg::BridgeErc20Token {
                token: token.to_string(),
                asset_hash: asset_hash.to_string(),
                account_hash: account_hash.to_string(),
            },
            &coins(BRIDGE_FEE, DENOM),
        )
    }

    /// Bridge a new asset and return the token created for it.
    pub fn bridge_new_asset(&mut self, asset_hash: &str, account_hash: &str, supply: u128) -> Addr {
        let governor = self.governor.clone();
        self.exec(
            &governor,
            &ExecuteMsg::BridgeAsset {
                asset_hash: asset_hash.to_string(),
                account_hash: account_hash.to_string(),
                name: "Bridged Asset".to_string(),
                symbol: "BRA".to_string(),
                total_supply: Uint128::new(supply),
                decimals: None,
            },
            &coins(BRIDGE_FEE, DENOM),
        )
        .unwrap();
        self.erc20_token(asset_hash).unwrap()
    }

    /// Record a claim on a native chain deposit for `recipient`.
    pub fn claim(&mut self, tx_hash: &str, recipient: &Addr) -> anyhow::Result<AppResponse> {
        let user = self.user.clone();
        self.exec(
            &user,
            &ExecuteMsg::TransferFromNativeChain {
                tx_hash: tx_hash.to_string(),
                proof: "signature".to_string(),
                recipient: recipient.to_string(),
            },
            &coins(TARGET_TRANSFER_FEE, DENOM),
        )
    }

    pub fn confirm(
        &mut self,
        tx_hash: &str,
        token: &Addr,
        amount: u128,
    ) -> anyhow::Result<AppResponse> {
        let governor = self.governor.clone();
        self.exec(
            &governor,
            &ExecuteMsg::ConfirmTransfer {
                tx_hash: tx_hash.to_string(),
                token: token.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn approve(&mut self, owner: &Addr, token: &Addr, amount: u128) {
        self.app
            .execute_contract(
                owner.clone(),
                token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.bridge.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    /// Send `amount` of `token` to the native chain and return the tx id.
    pub fn transfer_to_native(
        &mut self,
        sender: &Addr,
        token: &Addr,
        amount: u128,
    ) -> anyhow::Result<String> {
        let res = self.exec(
            sender,
            &ExecuteMsg::TransferToNativeChain {
                token: token.to_string(),
                native_recipient: NATIVE_RECIPIENT.to_string(),
                amount: Uint128::new(amount),
            },
            &coins(NATIVE_TRANSFER_FEE, DENOM),
        )?;
        Ok(wasm_attr(&res, "tx_id"))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn cw20_balance(&self, token: &Addr, address: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    pub fn total_supply(&self, token: &Addr) -> Uint128 {
        let res: TokenInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})
            .unwrap();
        res.total_supply
    }

    pub fn bank_balance(&self, address: &Addr) -> Uint128 {
        self.app.wrap().query_balance(address, DENOM).unwrap().amount
    }

    pub fn erc20_token(&self, asset_hash: &str) -> Option<Addr> {
        let res: Erc20TokenResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.bridge,
                &QueryMsg::Erc20Token {
                    asset_hash: asset_hash.to_string(),
                },
            )
            .unwrap();
        res.token
    }

    pub fn asset_hash(&self, token: &Addr) -> Option<String> {
        let res: AssetHashResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.bridge,
                &QueryMsg::AssetHash {
                    token: token.to_string(),
                },
            )
            .unwrap();
        res.asset_hash
    }

    pub fn account_for_asset(&self, asset_hash: &str) -> Option<String> {
        let res: AccountForAssetResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.bridge,
                &QueryMsg::AccountForAsset {
                    asset_hash: asset_hash.to_string(),
                },
            )
            .unwrap();
        res.account_hash
    }

    pub fn pending_native(&self, tx_id: &str) -> Option<NativeChainTransfer> {
        let res: PendingNativeChainTransferResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.bridge,
                &QueryMsg::PendingNativeChainTransfer {
                    tx_id: tx_id.to_string(),
                },
            )
            .unwrap();
        res.transfer
    }

    pub fn pending_cross_chain(&self, tx_hash: &str) -> Option<CrossChainTransfer> {
        let res: PendingCrossChainTransferResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.bridge,
                &QueryMsg::PendingCrossChainTransfer {
                    tx_hash: tx_hash.to_string(),
                },
            )
            .unwrap();
        res.transfer
    }

    pub fn collected_fees(&self) -> Uint128 {
        let res: CollectedFeesResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.bridge, &QueryMsg::CollectedFees {})
            .unwrap();
        res.fees.amount
    }
}
