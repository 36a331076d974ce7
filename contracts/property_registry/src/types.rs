use soroban_sdk::{contracterror, contracttype, Address, String};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================

/// Falhas tipadas do registro. Os códigos são estáveis: frontends e automações
/// fazem `match` diretamente sobre eles.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    PropertyNotFound = 4,
    InvalidArgument = 5,
    TokenCreationFailed = 6,
}

// ============================================================================
// PAPÉIS (ACCESS CONTROL)
// ============================================================================

/// Papéis reconhecidos pelo gate de acesso.
///
/// `Admin` administra todos os papéis, inclusive ele mesmo. `Registrar` pode
/// cadastrar imóveis e alterar status, mas não gerencia papéis.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    Registrar,
}

impl Role {
    /// Papel exigido para conceder ou revogar `self`.
    pub fn admin_role(&self) -> Role {
        Role::Admin
    }
}

// ============================================================================
// REGISTRO DE IMÓVEL
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    pub id: u64,
    pub token_address: Address,
    pub name: String,
    pub symbol: String,
    pub property_address: String,
    pub total_value: i128,
    pub total_tokens: i128,
    pub is_active: bool,
    /// Sequence do ledger no momento do cadastro
    pub registered_at: u32,
}
