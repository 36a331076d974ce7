use soroban_sdk::{symbol_short, Address, Env};
use crate::types::{Property, RegistryError, Role};

// ============================================================================
// CONSTANTES
// ============================================================================

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL do storage de instância (factory, contadores, papéis)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

pub fn bump_property(env: &Env, id: u64) {
    let key = (symbol_short!("property"), id);
    env.storage().persistent().extend_ttl(
        &key,
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

pub fn bump_token_index(env: &Env, token: &Address) {
    let key = (symbol_short!("tok_idx"), token.clone());
    env.storage().persistent().extend_ttl(
        &key,
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

pub fn bump_role_member(env: &Env, role: Role, account: &Address) {
    let key = (symbol_short!("role"), role, account.clone());
    env.storage().persistent().extend_ttl(
        &key,
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

// ============================================================================
// TOKEN FACTORY
// ============================================================================

pub fn has_token_factory(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("factory"))
}

pub fn get_token_factory(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&symbol_short!("factory"))
        .ok_or(RegistryError::NotInitialized)
}

pub fn set_token_factory(env: &Env, factory: &Address) {
    env.storage().instance().set(&symbol_short!("factory"), factory);
}

// ============================================================================
// CONTADORES
// ============================================================================

pub fn get_property_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&symbol_short!("prop_cnt"))
        .unwrap_or(0)
}

pub fn set_property_count(env: &Env, count: u64) {
    env.storage().instance().set(&symbol_short!("prop_cnt"), &count);
}

pub fn get_active_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&symbol_short!("active"))
        .unwrap_or(0)
}

pub fn set_active_count(env: &Env, count: u64) {
    env.storage().instance().set(&symbol_short!("active"), &count);
}

// ============================================================================
// PROPRIEDADES
// ============================================================================

/// Toda leitura bem-sucedida renova o TTL do registro.
pub fn get_property(env: &Env, id: u64) -> Option<Property> {
    let key = (symbol_short!("property"), id);
    let property: Option<Property> = env.storage().persistent().get(&key);
    if property.is_some() {
        bump_property(env, id);
    }
    property
}

pub fn set_property(env: &Env, property: &Property) {
    let key = (symbol_short!("property"), property.id);
    env.storage().persistent().set(&key, property);
    bump_property(env, property.id);
}

/// Índice reverso token -> id. Garante unicidade do endereço do token.
pub fn get_property_id_by_token(env: &Env, token: &Address) -> Option<u64> {
    let key = (symbol_short!("tok_idx"), token.clone());
    let id: Option<u64> = env.storage().persistent().get(&key);
    if id.is_some() {
        bump_token_index(env, token);
    }
    id
}

pub fn set_property_id_by_token(env: &Env, token: &Address, id: u64) {
    let key = (symbol_short!("tok_idx"), token.clone());
    env.storage().persistent().set(&key, &id);
    bump_token_index(env, token);
}

// ============================================================================
// PAPÉIS
// ============================================================================

/// Membros ativos têm o TTL renovado a cada consulta, senão o gate expira.
pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    let key = (symbol_short!("role"), role, account.clone());
    let granted = env.storage().persistent().has(&key);
    if granted {
        bump_role_member(env, role, account);
    }
    granted
}

pub fn set_role(env: &Env, role: Role, account: &Address, granted: bool) {
    let key = (symbol_short!("role"), role, account.clone());
    if granted {
        env.storage().persistent().set(&key, &true);
        bump_role_member(env, role, account);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn get_role_count(env: &Env, role: Role) -> u32 {
    let key = (symbol_short!("role_cnt"), role);
    env.storage()
        .instance()
        .get(&key)
        .unwrap_or(0)
}

pub fn set_role_count(env: &Env, role: Role, count: u32) {
    let key = (symbol_short!("role_cnt"), role);
    env.storage().instance().set(&key, &count);
}

// ============================================================================
// REENTRANCY GUARD
// ============================================================================

pub fn is_reentrancy_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("locked"))
        .unwrap_or(false)
}

pub fn set_reentrancy_guard(env: &Env, locked: bool) {
    env.storage().instance().set(&symbol_short!("locked"), &locked);
}
