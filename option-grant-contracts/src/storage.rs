//! Storage layout for the option grant ledger.
//!
//! # Storage Design
//!
//! - Instance storage: option pool counters and ledger configuration
//!   (read on nearly every call)
//! - Persistent storage: grant records keyed by beneficiary, plus the
//!   ordered beneficiary registry used by the vesting sweep. The registry is
//!   one entry per beneficiary, `(benef, index)`, with a separate count, so
//!   no single ledger entry grows with the number of grants.
//!
//! Principal, pause flag and reentrancy latch live with their owning modules
//! (`admin`, `pause`, `reentrancy`).

use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::types::{GrantRecord, LedgerConfig, OptionPool};

/// Storage keys for the contract
pub struct StorageKeys;

impl StorageKeys {
    /// Key for the option pool counters
    pub fn pool() -> Symbol {
        symbol_short!("pool")
    }

    /// Key for the ledger configuration
    pub fn config() -> Symbol {
        symbol_short!("config")
    }

    /// Key for the number of registered beneficiaries
    pub fn beneficiary_count() -> Symbol {
        symbol_short!("benef_cnt")
    }

    /// Key for the beneficiary registered at `index`
    pub fn beneficiary_at(index: u32) -> (Symbol, u32) {
        (symbol_short!("benef"), index)
    }

    /// Key for a beneficiary's grant record
    pub fn grant(beneficiary: &Address) -> (Symbol, Address) {
        (symbol_short!("grant"), beneficiary.clone())
    }
}

pub struct PoolStorage;

impl PoolStorage {
    pub fn get(env: &Env) -> Option<OptionPool> {
        env.storage().instance().get(&StorageKeys::pool())
    }

    pub fn set(env: &Env, pool: &OptionPool) {
        env.storage().instance().set(&StorageKeys::pool(), pool);
    }
}

pub struct ConfigStorage;

impl ConfigStorage {
    pub fn get(env: &Env) -> Option<LedgerConfig> {
        env.storage().instance().get(&StorageKeys::config())
    }

    pub fn set(env: &Env, config: &LedgerConfig) {
        env.storage().instance().set(&StorageKeys::config(), config);
    }
}

pub struct GrantStorage;

impl GrantStorage {
    pub fn get(env: &Env, beneficiary: &Address) -> Option<GrantRecord> {
        env.storage()
            .persistent()
            .get(&StorageKeys::grant(beneficiary))
    }

    pub fn has(env: &Env, beneficiary: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&StorageKeys::grant(beneficiary))
    }

    pub fn set(env: &Env, grant: &GrantRecord) {
        env.storage()
            .persistent()
            .set(&StorageKeys::grant(&grant.beneficiary), grant);
    }

    pub fn beneficiary_count(env: &Env) -> u32 {
        env.storage()
            .persistent()
            .get(&StorageKeys::beneficiary_count())
            .unwrap_or(0)
    }

    pub fn beneficiary_at(env: &Env, index: u32) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&StorageKeys::beneficiary_at(index))
    }

    /// Beneficiaries in the order they first received a grant.
    pub fn beneficiaries(env: &Env) -> Vec<Address> {
        let mut beneficiaries = Vec::new(env);
        for index in 0..Self::beneficiary_count(env) {
            if let Some(beneficiary) = Self::beneficiary_at(env, index) {
                beneficiaries.push_back(beneficiary);
            }
        }
        beneficiaries
    }

    /// Append `beneficiary` to the registry.
    pub fn register_beneficiary(env: &Env, beneficiary: &Address) {
        let index = Self::beneficiary_count(env);
        env.storage()
            .persistent()
            .set(&StorageKeys::beneficiary_at(index), beneficiary);
        env.storage()
            .persistent()
            .set(&StorageKeys::beneficiary_count(), &(index + 1));
    }
}
