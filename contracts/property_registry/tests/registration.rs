#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use property_registry::RegistryError;
use setup::TestEnv;
use soroban_sdk::{
    symbol_short, testutils::{Events, Ledger}, Address, IntoVal, String, TryFromVal, Val, Vec,
};

// ============================================================================
// CADASTRO
// ============================================================================

#[test]
fn test_starts_with_zero_properties() {
    let t = TestEnv::new();
    assert_eq!(t.client.property_count(), 0);
    assert_eq!(t.client.get_active_property_count(), 0);
}

#[test]
fn test_register_property_successfully() {
    let t = TestEnv::new();
    t.env.ledger().set_sequence_number(4242);

    let id = t.register("Test Property Token", "TPT", "123 Test St", 1_000_000, 10_000);
    assert_eq!(id, 1);
    assert_eq!(t.client.property_count(), 1);

    let property = t.client.get_property(&1);
    assert_eq!(property.id, 1);
    assert_eq!(property.name, t.text("Test Property Token"));
    assert_eq!(property.symbol, t.text("TPT"));
    assert_eq!(property.property_address, t.text("123 Test St"));
    assert_eq!(property.total_value, 1_000_000);
    assert_eq!(property.total_tokens, 10_000);
    assert!(property.is_active);
    assert_eq!(property.registered_at, 4242);
}

#[test]
fn test_ids_are_sequential() {
    let t = TestEnv::new();

    for expected in 1..=5u64 {
        let before = t.client.property_count();
        let id = t.register_a();
        assert_eq!(id, before + 1);
        assert_eq!(id, expected);
        assert_eq!(t.client.property_count(), before + 1);
    }
}

#[test]
fn test_factory_receives_name_symbol_and_supply() {
    let t = TestEnv::new();
    t.register("Luxury Downtown Condo Tokens", "LDCT", "123 Main St, San Francisco, CA", 2_500_000, 10_000);

    let (name, symbol, supply) = t.factory.last_call().unwrap();
    assert_eq!(name, t.text("Luxury Downtown Condo Tokens"));
    assert_eq!(symbol, t.text("LDCT"));
    assert_eq!(supply, 10_000);
    assert_eq!(t.factory.minted(), 1);
}

#[test]
fn test_each_property_gets_its_own_token() {
    let t = TestEnv::new();
    t.register_a();
    t.register_b();

    let a = t.client.get_property(&1);
    let b = t.client.get_property(&2);
    assert_ne!(a.token_address, b.token_address);

    assert_eq!(t.client.get_property_by_token(&a.token_address), a);
    assert_eq!(t.client.get_property_by_token(&b.token_address), b);
}

#[test]
fn test_unknown_token_lookup_fails() {
    let t = TestEnv::new();
    t.register_a();

    let res = t.client.try_get_property_by_token(&t.create_user());
    assert_eq!(res, Err(Ok(RegistryError::PropertyNotFound)));
}

// ============================================================================
// FALHAS
// ============================================================================

#[test]
fn test_non_admin_cannot_register() {
    let t = TestEnv::new();
    let outsider = t.create_user();

    let res = t.client.try_register_property(
        &outsider,
        &t.text("Test Property"),
        &t.text("TPT"),
        &t.text("123 Test St"),
        &1_000_000,
        &10_000,
    );

    assert_eq!(res, Err(Ok(RegistryError::Unauthorized)));
    assert_eq!(t.client.property_count(), 0);
    assert_eq!(t.factory.minted(), 0);
}

#[test]
fn test_zero_tokens_rejected() {
    let t = TestEnv::new();

    let res = t.client.try_register_property(
        &t.admin,
        &t.text("Test Property"),
        &t.text("TPT"),
        &t.text("123 Test St"),
        &1_000_000,
        &0,
    );

    assert_eq!(res, Err(Ok(RegistryError::InvalidArgument)));
    assert_eq!(t.client.property_count(), 0);
}

#[test]
fn test_invalid_arguments_rejected() {
    let t = TestEnv::new();
    let empty = t.text("");

    let cases = [
        (empty.clone(), t.text("TPT"), t.text("123 Test St"), 1_000_000i128, 10_000i128),
        (t.text("Test"), empty.clone(), t.text("123 Test St"), 1_000_000, 10_000),
        (t.text("Test"), t.text("TPT"), empty.clone(), 1_000_000, 10_000),
        (t.text("Test"), t.text("TPT"), t.text("123 Test St"), -1, 10_000),
        (t.text("Test"), t.text("TPT"), t.text("123 Test St"), 1_000_000, -10),
    ];

    for (name, symbol, location, value, tokens) in cases.iter() {
        let res = t
            .client
            .try_register_property(&t.admin, name, symbol, location, value, tokens);
        assert_eq!(res, Err(Ok(RegistryError::InvalidArgument)));
    }

    assert_eq!(t.client.property_count(), 0);
    assert_eq!(t.factory.minted(), 0);
}

#[test]
fn test_factory_failure_consumes_no_id() {
    let t = TestEnv::new();
    t.register_a();

    t.factory.set_failing(&true);
    let res = t.client.try_register_property(
        &t.admin,
        &t.text("Property 2"),
        &t.text("P2"),
        &t.text("Address 2"),
        &2_000_000,
        &20_000,
    );
    assert_eq!(res, Err(Ok(RegistryError::TokenCreationFailed)));
    assert_eq!(t.client.property_count(), 1);
    assert_eq!(t.client.get_active_property_count(), 1);
    assert_eq!(
        t.client.try_get_property(&2),
        Err(Ok(RegistryError::PropertyNotFound))
    );

    // Sem buracos na sequência depois da falha
    t.factory.set_failing(&false);
    assert_eq!(t.register_b(), 2);
}

#[test]
fn test_duplicate_token_address_rejected() {
    let t = TestEnv::new();
    t.register_a();

    t.factory.set_repeat(&true);
    let res = t.client.try_register_property(
        &t.admin,
        &t.text("Property 2"),
        &t.text("P2"),
        &t.text("Address 2"),
        &2_000_000,
        &20_000,
    );

    assert_eq!(res, Err(Ok(RegistryError::TokenCreationFailed)));
    assert_eq!(t.client.property_count(), 1);
}

#[test]
fn test_get_property_out_of_range() {
    let t = TestEnv::new();
    t.register_a();
    t.register_b();

    for id in [0u64, 3, 999, u64::MAX] {
        assert_eq!(
            t.client.try_get_property(&id),
            Err(Ok(RegistryError::PropertyNotFound))
        );
    }
}

// ============================================================================
// EVENTOS
// ============================================================================

#[test]
fn test_registration_event() {
    let t = TestEnv::new();
    t.register_a();

    let property = t.client.get_property(&1);
    let (contract, topics, data) = t.env.events().all().last().unwrap();

    assert_eq!(contract, t.client.address);
    let expected: Vec<Val> = (symbol_short!("prop_reg"), 1u64).into_val(&t.env);
    assert_eq!(topics, expected);

    let payload = <(Address, String, i128, i128)>::try_from_val(&t.env, &data).unwrap();
    assert_eq!(payload.0, property.token_address);
    assert_eq!(payload.1, t.text("Address 1"));
    assert_eq!(payload.2, 1_000_000);
    assert_eq!(payload.3, 10_000);
}

#[test]
fn test_status_event() {
    let t = TestEnv::new();
    t.register_a();
    t.client.set_property_status(&t.admin, &1, &false);

    let (_, topics, data) = t.env.events().all().last().unwrap();
    let expected: Vec<Val> = (symbol_short!("prop_stat"), 1u64).into_val(&t.env);
    assert_eq!(topics, expected);
    assert!(!bool::try_from_val(&t.env, &data).unwrap());
}

#[test]
fn test_failed_registration_emits_no_event() {
    let t = TestEnv::new();
    t.register_a();
    let before = t.env.events().all().len();
    let registered = t.count_events(symbol_short!("prop_reg"));

    let invalid = t.client.try_register_property(
        &t.admin,
        &t.text(""),
        &t.text("P2"),
        &t.text("Address 2"),
        &2_000_000,
        &20_000,
    );
    assert_eq!(invalid, Err(Ok(RegistryError::InvalidArgument)));
    assert!(t.env.events().all().len() <= before);
    assert!(t.count_events(symbol_short!("prop_reg")) <= registered);

    t.factory.set_failing(&true);
    let failed = t.client.try_register_property(
        &t.admin,
        &t.text("Property 2"),
        &t.text("P2"),
        &t.text("Address 2"),
        &2_000_000,
        &20_000,
    );
    assert_eq!(failed, Err(Ok(RegistryError::TokenCreationFailed)));
    assert!(t.env.events().all().len() <= before);
    assert!(t.count_events(symbol_short!("prop_reg")) <= registered);
}

#[test]
fn test_noop_status_change_emits_no_event() {
    let t = TestEnv::new();
    t.register_a();
    let before = t.env.events().all().len();

    // Já está ativo
    t.client.set_property_status(&t.admin, &1, &true);

    assert!(t.env.events().all().len() <= before);
    assert_eq!(t.count_events(symbol_short!("prop_stat")), 0);
}
