//! Integration tests for the address mapping registry using cw-multi-test.

use cosmwasm_std::{Addr, Empty};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use address_mapping::msg::{
    AddressResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, MappingResponse,
    MappingsResponse, NativeAddressResponse, QueryMsg, SignatureResponse,
};

const NATIVE_1: &str = "CH111111111111111111111111111111111";
const NATIVE_2: &str = "CH222222222222222222222222222222222";
const NATIVE_3: &str = "CH333333333333333333333333333333333";

// ============================================================================
// Test Setup
// ============================================================================

fn contract_mapping() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        address_mapping::contract::execute,
        address_mapping::contract::instantiate,
        address_mapping::contract::query,
    );
    Box::new(contract)
}

struct Suite {
    app: App,
    registry: Addr,
    admin: Addr,
    user1: Addr,
    user2: Addr,
}

fn setup() -> Suite {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let user1 = Addr::unchecked("terra1user1");
    let user2 = Addr::unchecked("terra1user2");

    let code_id = app.store_code(contract_mapping());
    let registry = app
        .instantiate_contract(
            code_id,
            admin.clone(),
            &InstantiateMsg { admin: None },
            &[],
            "address-mapping",
            Some(admin.to_string()),
        )
        .unwrap();

    Suite {
        app,
        registry,
        admin,
        user1,
        user2,
    }
}

impl Suite {
    fn map(&mut self, sender: &Addr, native: &str, signature: &str) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.registry.clone(),
            &ExecuteMsg::MapAddress {
                native_address: native.to_string(),
                signature: signature.to_string(),
            },
            &[],
        )
    }

    fn remove(&mut self, sender: &Addr, address: &Addr) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.registry.clone(),
            &ExecuteMsg::RemoveMappedAddress {
                address: address.to_string(),
            },
            &[],
        )
    }

    fn native_of(&self, address: &Addr) -> Option<String> {
        let res: NativeAddressResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.registry,
                &QueryMsg::NativeAddress {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.native_address
    }

    fn address_of(&self, native: &str) -> Option<Addr> {
        let res: AddressResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.registry,
                &QueryMsg::Address {
                    native_address: native.to_string(),
                },
            )
            .unwrap();
        res.address
    }

    fn signature_of(&self, native: &str) -> Option<String> {
        let res: SignatureResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.registry,
                &QueryMsg::Signature {
                    native_address: native.to_string(),
                },
            )
            .unwrap();
        res.signature
    }
}

// ============================================================================
// Instantiation
// ============================================================================

#[test]
fn test_instantiate_defaults_admin_to_sender() {
    let suite = setup();
    let config: ConfigResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.registry, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.admin, suite.admin);
}

// ============================================================================
// MapAddress
// ============================================================================

#[test]
fn test_map_address() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    suite.map(&user1, NATIVE_1, "signature1").unwrap();

    assert_eq!(suite.native_of(&user1), Some(NATIVE_1.to_string()));
    assert_eq!(suite.address_of(NATIVE_1), Some(user1.clone()));
    assert_eq!(suite.signature_of(NATIVE_1), Some("signature1".to_string()));

    // untouched
    assert_eq!(suite.native_of(&user2), None);
    assert_eq!(suite.address_of(NATIVE_2), None);
    assert_eq!(suite.signature_of(NATIVE_2), None);
}

#[test]
fn test_map_address_for_all_senders() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    suite.map(&user1, NATIVE_1, "signature1").unwrap();
    suite.map(&user2, NATIVE_2, "signature2").unwrap();

    assert_eq!(suite.native_of(&user1), Some(NATIVE_1.to_string()));
    assert_eq!(suite.native_of(&user2), Some(NATIVE_2.to_string()));
    assert_eq!(suite.address_of(NATIVE_2), Some(user2));
    assert_eq!(suite.signature_of(NATIVE_2), Some("signature2".to_string()));
}

#[test]
fn test_reject_mapping_if_already_exists() {
    let mut suite = setup();
    let user1 = suite.user1.clone();

    suite.map(&user1, NATIVE_1, "signature1").unwrap();
    let res = suite.map(&user1, NATIVE_3, "signature3");

    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("already mapped"),
        "unexpected error: {}",
        err_str
    );

    assert_eq!(suite.native_of(&user1), Some(NATIVE_1.to_string()));
    assert_eq!(suite.signature_of(NATIVE_1), Some("signature1".to_string()));
    assert_eq!(suite.address_of(NATIVE_3), None);
    assert_eq!(suite.signature_of(NATIVE_3), None);
}

#[test]
fn test_reject_mapping_native_address_held_by_another_address() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    suite.map(&user1, NATIVE_1, "signature1").unwrap();
    let res = suite.map(&user2, NATIVE_1, "signature2");

    assert!(res.is_err());
    assert_eq!(suite.address_of(NATIVE_1), Some(user1));
    assert_eq!(suite.native_of(&user2), None);
    assert_eq!(suite.signature_of(NATIVE_1), Some("signature1".to_string()));
}

#[test]
fn test_reject_mapping_with_wrong_prefix() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    assert!(suite
        .map(&user1, "CF111111111111111111111111111111111", "signature1")
        .is_err());
    assert!(suite
        .map(&user2, "FH111111111111111111111111111111111", "signature1")
        .is_err());

    assert_eq!(suite.native_of(&user1), None);
    assert_eq!(suite.native_of(&user2), None);
}

#[test]
fn test_reject_mapping_with_invalid_trailing_character() {
    let mut suite = setup();
    let user1 = suite.user1.clone();

    for native in [
        "CH11111111111111111111111111111111 ",
        "CH11111111111111111111111111111111.",
        "CH11111111111111111111111111111111/",
        "CH11111111111111111111111111111111\\",
    ] {
        let res = suite.map(&user1, native, "signature1");
        assert!(res.is_err());
        let err_str = res.unwrap_err().root_cause().to_string();
        assert!(
            err_str.contains("Invalid native address"),
            "unexpected error: {}",
            err_str
        );
    }

    assert_eq!(suite.native_of(&user1), None);
}

#[test]
fn test_reject_mapping_with_wrong_length() {
    let mut suite = setup();
    let user1 = suite.user1.clone();

    assert!(suite
        .map(&user1, "CH11111111111111111111111111111111", "signature1")
        .is_err());
    assert_eq!(suite.native_of(&user1), None);
}

// ============================================================================
// RemoveMappedAddress
// ============================================================================

#[test]
fn test_remove_mapping_by_admin() {
    let mut suite = setup();
    let (admin, user1, user2) = (suite.admin.clone(), suite.user1.clone(), suite.user2.clone());

    suite.map(&user1, NATIVE_1, "signature1").unwrap();
    suite.map(&user2, NATIVE_2, "signature2").unwrap();
    suite.remove(&admin, &user1).unwrap();

    assert_eq!(suite.native_of(&user1), None);
    assert_eq!(suite.address_of(NATIVE_1), None);
    assert_eq!(suite.signature_of(NATIVE_1), None);

    assert_eq!(suite.native_of(&user2), Some(NATIVE_2.to_string()));
    assert_eq!(suite.address_of(NATIVE_2), Some(user2));
}

#[test]
fn test_reject_removal_if_not_admin() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    suite.map(&user1, NATIVE_1, "signature1").unwrap();

    let res = suite.remove(&user1, &user1);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Unauthorized"),
        "unexpected error: {}",
        err_str
    );
    assert!(suite.remove(&user2, &user1).is_err());

    assert_eq!(suite.native_of(&user1), Some(NATIVE_1.to_string()));
    assert_eq!(suite.address_of(NATIVE_1), Some(user1));
    assert_eq!(suite.signature_of(NATIVE_1), Some("signature1".to_string()));
}

#[test]
fn test_reject_removal_if_mapping_does_not_exist() {
    let mut suite = setup();
    let (admin, user1) = (suite.admin.clone(), suite.user1.clone());

    let res = suite.remove(&admin, &user1);
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("is not mapped"),
        "unexpected error: {}",
        err_str
    );
}

#[test]
fn test_accept_repeated_mapping_after_removal() {
    let mut suite = setup();
    let (admin, user1) = (suite.admin.clone(), suite.user1.clone());

    suite.map(&user1, NATIVE_1, "signature1").unwrap();
    suite.remove(&admin, &user1).unwrap();
    suite.map(&user1, NATIVE_3, "signature3").unwrap();

    assert_eq!(suite.native_of(&user1), Some(NATIVE_3.to_string()));
    assert_eq!(suite.address_of(NATIVE_3), Some(user1));
    assert_eq!(suite.signature_of(NATIVE_3), Some("signature3".to_string()));

    // the old native address does not linger
    assert_eq!(suite.address_of(NATIVE_1), None);
    assert_eq!(suite.signature_of(NATIVE_1), None);
}

#[test]
fn test_freed_native_address_can_be_claimed_by_another_address() {
    let mut suite = setup();
    let (admin, user1, user2) = (suite.admin.clone(), suite.user1.clone(), suite.user2.clone());

    suite.map(&user1, NATIVE_1, "signature1").unwrap();
    suite.remove(&admin, &user1).unwrap();
    suite.map(&user2, NATIVE_1, "signature2").unwrap();

    assert_eq!(suite.address_of(NATIVE_1), Some(user2));
    assert_eq!(suite.native_of(&user1), None);
}

// ============================================================================
// Admin & Enumeration
// ============================================================================

#[test]
fn test_update_admin() {
    let mut suite = setup();
    let (admin, user1, user2) = (suite.admin.clone(), suite.user1.clone(), suite.user2.clone());

    // non-admin cannot take over
    let res = suite.app.execute_contract(
        user1.clone(),
        suite.registry.clone(),
        &ExecuteMsg::UpdateAdmin {
            admin: user1.to_string(),
        },
        &[],
    );
    assert!(res.is_err());

    suite
        .app
        .execute_contract(
            admin.clone(),
            suite.registry.clone(),
            &ExecuteMsg::UpdateAdmin {
                admin: user1.to_string(),
            },
            &[],
        )
        .unwrap();

    suite.map(&user2, NATIVE_2, "signature2").unwrap();
    // previous admin lost the role immediately
    assert!(suite.remove(&admin, &user2).is_err());
    suite.remove(&user1, &user2).unwrap();
    assert_eq!(suite.native_of(&user2), None);
}

#[test]
fn test_query_mapping_and_pagination() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    suite.map(&user1, NATIVE_1, "signature1").unwrap();
    suite.map(&user2, NATIVE_2, "signature2").unwrap();

    let res: MappingResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.registry,
            &QueryMsg::Mapping {
                address: user1.to_string(),
            },
        )
        .unwrap();
    let mapping = res.mapping.unwrap();
    assert_eq!(mapping.native_address, NATIVE_1);
    assert_eq!(mapping.signature, "signature1");

    let page: MappingsResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.registry,
            &QueryMsg::Mappings {
                start_after: None,
                limit: Some(1),
            },
        )
        .unwrap();
    assert_eq!(page.mappings.len(), 1);
    assert_eq!(page.mappings[0].address, user1);

    let page: MappingsResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.registry,
            &QueryMsg::Mappings {
                start_after: Some(user1.to_string()),
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(page.mappings.len(), 1);
    assert_eq!(page.mappings[0].address, user2);
    assert_eq!(page.mappings[0].native_address, NATIVE_2);
}
