use soroban_sdk::{Env, Vec};
use crate::storage;
use crate::types::Property;

// ============================================================================
// CONSULTAS PAGINADAS SOBRE IMÓVEIS ATIVOS
// ============================================================================

/// Retorna a fatia `[offset, offset + limit)` dos imóveis ativos, em ordem
/// crescente de id.
///
/// Não existe índice secundário: a tabela completa é varrida e filtrada pelo
/// flag `is_active`. A varredura termina assim que `limit` itens foram
/// coletados, e nem começa quando o offset já passa do total de ativos.
pub fn active_page(env: &Env, offset: u32, limit: u32) -> Vec<Property> {
    let mut page = Vec::new(env);

    if limit == 0 || u64::from(offset) >= storage::get_active_count(env) {
        return page;
    }

    let total = storage::get_property_count(env);
    let mut skipped: u32 = 0;

    for id in 1..=total {
        let property = match storage::get_property(env, id) {
            Some(p) => p,
            None => continue,
        };
        if !property.is_active {
            continue;
        }
        if skipped < offset {
            skipped += 1;
            continue;
        }

        page.push_back(property);
        if page.len() >= limit {
            break;
        }
    }

    page
}

/// Recontagem completa dos ativos. O contador incremental precisa sempre bater
/// com este valor.
#[cfg(test)]
pub fn scan_active_count(env: &Env) -> u64 {
    let total = storage::get_property_count(env);
    let mut active = 0u64;

    for id in 1..=total {
        if let Some(p) = storage::get_property(env, id) {
            if p.is_active {
                active += 1;
            }
        }
    }

    active
}
