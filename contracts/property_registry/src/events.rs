use soroban_sdk::{symbol_short, Address, Env};
use crate::types::{Property, Role};

//
// EVENTOS DO REGISTRO
//

// Imóvel cadastrado e token de frações criado
pub fn emit_property_registered(env: &Env, property: &Property) {
    env.events().publish(
        (symbol_short!("prop_reg"), property.id),
        (
            property.token_address.clone(),
            property.property_address.clone(),
            property.total_value,
            property.total_tokens,
        ),
    );
}

// Status ativo/inativo alterado
pub fn emit_status_changed(env: &Env, id: u64, is_active: bool) {
    env.events().publish(
        (symbol_short!("prop_stat"), id),
        is_active,
    );
}

// Papel concedido
pub fn emit_role_granted(env: &Env, role: Role, account: &Address, sender: &Address) {
    env.events().publish(
        (symbol_short!("role_grnt"), role, account.clone()),
        sender.clone(),
    );
}

// Papel revogado (inclui renúncia, onde sender == account)
pub fn emit_role_revoked(env: &Env, role: Role, account: &Address, sender: &Address) {
    env.events().publish(
        (symbol_short!("role_rvk"), role, account.clone()),
        sender.clone(),
    );
}

// Factory de tokens trocada
pub fn emit_factory_updated(env: &Env, factory: &Address) {
    env.events().publish(
        (symbol_short!("factory"),),
        factory.clone(),
    );
}

//
// TESTES
//
