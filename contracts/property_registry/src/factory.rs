use soroban_sdk::{contractclient, log, Address, Env, String};
use crate::types::RegistryError;

// ============================================================================
// TOKEN FACTORY (COLABORADOR EXTERNO)
// ============================================================================

/// Interface consumida do contrato que cria um token fungível por imóvel.
/// O registro só conhece esta assinatura; a lógica do token fica fora daqui.
#[contractclient(name = "TokenFactoryClient")]
pub trait TokenFactoryInterface {
    fn create_token(env: Env, name: String, symbol: String, total_supply: i128) -> Address;
}

/// Chama a factory e converte qualquer falha (trap, erro do contrato ou valor
/// de retorno inválido) em `TokenCreationFailed`.
pub fn create_token(
    env: &Env,
    factory: &Address,
    name: &String,
    symbol: &String,
    total_supply: i128,
) -> Result<Address, RegistryError> {
    let client = TokenFactoryClient::new(env, factory);

    match client.try_create_token(name, symbol, &total_supply) {
        Ok(Ok(token_address)) => Ok(token_address),
        _ => {
            log!(env, "token factory call failed", factory.clone(), total_supply);
            Err(RegistryError::TokenCreationFailed)
        }
    }
}
