use soroban_sdk::{log, Address, Env};
use crate::events;
use crate::storage;
use crate::types::{RegistryError, Role};
use crate::validation;

// ============================================================================
// ACCESS CONTROL - CONCESSÃO E REVOGAÇÃO DE PAPÉIS
// ============================================================================

/// Concede o papel sem checar permissões. Usado no bootstrap e pelas
/// operações públicas depois da validação.
pub fn grant(env: &Env, role: Role, account: &Address, sender: &Address) -> Result<bool, RegistryError> {
    if storage::has_role(env, role, account) {
        return Ok(false);
    }

    let count = storage::get_role_count(env, role)
        .checked_add(1)
        .ok_or(RegistryError::InvalidArgument)?;

    storage::set_role(env, role, account, true);
    storage::set_role_count(env, role, count);

    events::emit_role_granted(env, role, account, sender);
    Ok(true)
}

fn revoke(env: &Env, role: Role, account: &Address, sender: &Address) -> bool {
    if !storage::has_role(env, role, account) {
        return false;
    }

    let count = storage::get_role_count(env, role).saturating_sub(1);

    storage::set_role(env, role, account, false);
    storage::set_role_count(env, role, count);

    events::emit_role_revoked(env, role, account, sender);
    true
}

/// Concede `role` a `account`. O caller precisa do papel administrador de `role`.
/// Conceder um papel já existente é no-op.
pub fn grant_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), RegistryError> {
    caller.require_auth();
    storage::bump_critical_storage(env);

    validation::require_initialized(env)?;
    validation::require_role(env, caller, role.admin_role())?;

    if grant(env, role, account, caller)? {
        log!(env, "role granted", role, account.clone());
    }
    Ok(())
}

/// Revoga `role` de `account`. Mesmas regras de `grant_role`.
pub fn revoke_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), RegistryError> {
    caller.require_auth();
    storage::bump_critical_storage(env);

    validation::require_initialized(env)?;
    validation::require_role(env, caller, role.admin_role())?;

    if revoke(env, role, account, caller) {
        log!(env, "role revoked", role, account.clone());
    }
    Ok(())
}

/// A própria conta abre mão do papel.
pub fn renounce_role(env: &Env, account: &Address, role: Role) -> Result<(), RegistryError> {
    account.require_auth();
    storage::bump_critical_storage(env);

    validation::require_initialized(env)?;

    if revoke(env, role, account, account) {
        log!(env, "role renounced", role, account.clone());
    }
    Ok(())
}
