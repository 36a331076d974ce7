use soroban_sdk::{Address, Env, String};
use crate::storage;
use crate::types::{Property, RegistryError, Role};

// ============================================================================
// VALIDAÇÕES (CHECKS do padrão CEI)
// ============================================================================

/// Valida se o contrato já foi inicializado
pub fn require_initialized(env: &Env) -> Result<(), RegistryError> {
    if !storage::has_token_factory(env) {
        return Err(RegistryError::NotInitialized);
    }
    Ok(())
}

/// Valida se o caller possui exatamente o papel informado
pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<(), RegistryError> {
    if !storage::has_role(env, role, caller) {
        return Err(RegistryError::Unauthorized);
    }
    Ok(())
}

/// Valida se o caller pode cadastrar imóveis ou alterar status (Admin ou Registrar)
pub fn require_property_manager(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    let allowed = storage::has_role(env, Role::Admin, caller)
        || storage::has_role(env, Role::Registrar, caller);

    if !allowed {
        return Err(RegistryError::Unauthorized);
    }
    Ok(())
}

/// Valida campos de texto obrigatórios
pub fn require_non_empty(value: &String) -> Result<(), RegistryError> {
    if value.len() == 0 {
        return Err(RegistryError::InvalidArgument);
    }
    Ok(())
}

/// Valida se o supply de frações é válido (> 0)
pub fn require_positive_tokens(total_tokens: i128) -> Result<(), RegistryError> {
    if total_tokens <= 0 {
        return Err(RegistryError::InvalidArgument);
    }
    Ok(())
}

/// Valida se a avaliação não é negativa
pub fn require_valid_value(total_value: i128) -> Result<(), RegistryError> {
    if total_value < 0 {
        return Err(RegistryError::InvalidArgument);
    }
    Ok(())
}

/// Valida todos os argumentos de cadastro de uma vez
pub fn require_valid_registration(
    name: &String,
    symbol: &String,
    property_address: &String,
    total_value: i128,
    total_tokens: i128,
) -> Result<(), RegistryError> {
    require_non_empty(name)?;
    require_non_empty(symbol)?;
    require_non_empty(property_address)?;
    require_valid_value(total_value)?;
    require_positive_tokens(total_tokens)?;
    Ok(())
}

/// Carrega o imóvel se `1 <= id <= property_count`
pub fn require_property(env: &Env, id: u64) -> Result<Property, RegistryError> {
    if id == 0 || id > storage::get_property_count(env) {
        return Err(RegistryError::PropertyNotFound);
    }
    storage::get_property(env, id).ok_or(RegistryError::PropertyNotFound)
}
