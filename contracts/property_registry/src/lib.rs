#![no_std]

mod access;
mod events;
mod factory;
mod pagination;
mod registry;
mod storage;
mod types;
mod validation;

// ============================================================================
// CONTRATO PRINCIPAL
// ============================================================================

pub use factory::{TokenFactoryClient, TokenFactoryInterface};
pub use registry::{PropertyRegistry, PropertyRegistryClient};
pub use types::*;
