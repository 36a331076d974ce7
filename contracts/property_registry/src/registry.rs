use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};
use crate::access;
use crate::events;
use crate::factory;
use crate::pagination;
use crate::storage;
use crate::types::{Property, RegistryError, Role};
use crate::validation;

//
// CONTRATO PRINCIPAL - PROPERTY REGISTRY
//

#[contract]
pub struct PropertyRegistry;

#[contractimpl]
impl PropertyRegistry {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa o registro.
    ///
    /// # Parâmetros
    /// - `admin`: único detentor de `Role::Admin` no gênese
    /// - `token_factory`: contrato que cria o token de frações de cada imóvel
    ///
    /// # Erros
    /// - `AlreadyInitialized`: se o contrato já foi inicializado
    pub fn initialize(
        env: Env,
        admin: Address,
        token_factory: Address,
    ) -> Result<(), RegistryError> {
        // CHECKS
        if storage::has_token_factory(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }
        admin.require_auth();

        // EFFECTS
        storage::set_token_factory(&env, &token_factory);
        storage::set_property_count(&env, 0);
        storage::set_active_count(&env, 0);
        access::grant(&env, Role::Admin, &admin, &admin)?;
        storage::bump_critical_storage(&env);

        log!(&env, "registry initialized", admin, token_factory);
        Ok(())
    }

    //
    // CADASTRO E STATUS - CEI PATTERN
    //

    /// Cadastra um imóvel e cria o token de frações correspondente.
    ///
    /// A factory é chamada antes de qualquer escrita: se ela falhar nenhum id é
    /// consumido e nenhum registro é gravado. Roda sob o guard de reentrância,
    /// pois é a única chamada externa do contrato.
    ///
    /// # Erros
    /// - `Unauthorized`: caller sem Admin/Registrar
    /// - `InvalidArgument`: texto vazio, `total_tokens <= 0` ou `total_value < 0`
    /// - `TokenCreationFailed`: a factory falhou ou devolveu um token já registrado
    pub fn register_property(
        env: Env,
        caller: Address,
        name: String,
        symbol: String,
        property_address: String,
        total_value: i128,
        total_tokens: i128,
    ) -> Result<u64, RegistryError> {
        // === REENTRANCY GUARD ===
        // O host já rejeita reentrada no mesmo contrato; o guard é uma segunda
        // barreira em torno da chamada à factory.
        if storage::is_reentrancy_locked(&env) {
            return Err(RegistryError::Unauthorized);
        }
        storage::set_reentrancy_guard(&env, true);

        let result = (|| -> Result<u64, RegistryError> {
            // === CHECKS ===
            caller.require_auth();
            storage::bump_critical_storage(&env);

            validation::require_initialized(&env)?;
            validation::require_property_manager(&env, &caller)?;
            validation::require_valid_registration(
                &name,
                &symbol,
                &property_address,
                total_value,
                total_tokens,
            )?;

            let factory_address = storage::get_token_factory(&env)?;
            let token_address =
                factory::create_token(&env, &factory_address, &name, &symbol, total_tokens)?;

            if storage::get_property_id_by_token(&env, &token_address).is_some() {
                log!(&env, "factory returned a token already in use", token_address);
                return Err(RegistryError::TokenCreationFailed);
            }

            // === EFFECTS ===
            let id = storage::get_property_count(&env)
                .checked_add(1)
                .ok_or(RegistryError::InvalidArgument)?;
            let active = storage::get_active_count(&env)
                .checked_add(1)
                .ok_or(RegistryError::InvalidArgument)?;

            let property = Property {
                id,
                token_address: token_address.clone(),
                name,
                symbol,
                property_address,
                total_value,
                total_tokens,
                is_active: true,
                registered_at: env.ledger().sequence(),
            };

            storage::set_property(&env, &property);
            storage::set_property_id_by_token(&env, &token_address, id);
            storage::set_property_count(&env, id);
            storage::set_active_count(&env, active);

            // === EVENTS ===
            events::emit_property_registered(&env, &property);
            log!(&env, "property registered", id, token_address);

            Ok(id)
        })();

        // === LIBERAR GUARD ===
        storage::set_reentrancy_guard(&env, false);
        result
    }

    /// Ativa ou desativa um imóvel. Repetir o status atual é no-op (sem evento).
    pub fn set_property_status(
        env: Env,
        caller: Address,
        id: u64,
        active: bool,
    ) -> Result<(), RegistryError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_property_manager(&env, &caller)?;
        let mut property = validation::require_property(&env, id)?;

        if property.is_active == active {
            return Ok(());
        }

        // === EFFECTS ===
        let current = storage::get_active_count(&env);
        let new_active = if active {
            current.checked_add(1).ok_or(RegistryError::InvalidArgument)?
        } else {
            current.checked_sub(1).ok_or(RegistryError::InvalidArgument)?
        };

        property.is_active = active;
        storage::set_property(&env, &property);
        storage::set_active_count(&env, new_active);

        // === EVENTS ===
        events::emit_status_changed(&env, id, active);
        log!(&env, "property status changed", id, active);

        Ok(())
    }

    //
    // CONSULTAS (leitura, sem gate)
    //

    /// Retorna um imóvel pelo id (`1..=property_count`).
    pub fn get_property(env: Env, id: u64) -> Result<Property, RegistryError> {
        validation::require_property(&env, id)
    }

    /// Busca reversa pelo endereço do token de frações.
    pub fn get_property_by_token(env: Env, token_address: Address) -> Result<Property, RegistryError> {
        let id = storage::get_property_id_by_token(&env, &token_address)
            .ok_or(RegistryError::PropertyNotFound)?;
        validation::require_property(&env, id)
    }

    /// Total histórico de imóveis cadastrados (ativos e inativos).
    pub fn property_count(env: Env) -> u64 {
        storage::bump_critical_storage(&env);
        storage::get_property_count(&env)
    }

    pub fn get_active_property_count(env: Env) -> u64 {
        storage::bump_critical_storage(&env);
        storage::get_active_count(&env)
    }

    /// Página `[offset, offset + limit)` dos imóveis ativos em ordem de id.
    /// Offset além do fim ou `limit == 0` devolvem lista vazia; `limit` maior que
    /// o restante é limitado ao que existe.
    pub fn get_active_properties(env: Env, offset: u32, limit: u32) -> Vec<Property> {
        storage::bump_critical_storage(&env);
        pagination::active_page(&env, offset, limit)
    }

    //
    // CONFIGURAÇÃO
    //

    pub fn token_factory(env: Env) -> Result<Address, RegistryError> {
        storage::bump_critical_storage(&env);
        storage::get_token_factory(&env)
    }

    /// Troca a factory usada nos próximos cadastros (apenas Admin).
    /// Imóveis já cadastrados mantêm seus tokens.
    pub fn set_token_factory(
        env: Env,
        caller: Address,
        token_factory: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_role(&env, &caller, Role::Admin)?;

        storage::set_token_factory(&env, &token_factory);
        events::emit_factory_updated(&env, &token_factory);
        log!(&env, "token factory updated", token_factory);

        Ok(())
    }

    //
    // PAPÉIS
    //

    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), RegistryError> {
        access::grant_role(&env, &caller, role, &account)
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), RegistryError> {
        access::revoke_role(&env, &caller, role, &account)
    }

    pub fn renounce_role(env: Env, account: Address, role: Role) -> Result<(), RegistryError> {
        access::renounce_role(&env, &account, role)
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        storage::has_role(&env, role, &account)
    }

    pub fn role_member_count(env: Env, role: Role) -> u32 {
        storage::get_role_count(&env, role)
    }
}

//
// TESTES UNITÁRIOS
//
