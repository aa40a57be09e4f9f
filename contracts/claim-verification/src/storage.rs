use soroban_sdk::{Address, Env, String, Vec};

use crate::types::{DataKey, Error, VerificationRecord};

// -----------------------------------------------------------------------
// Configuration
// -----------------------------------------------------------------------

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn save_config(env: &Env, admin: &Address, claim_store: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().set(&DataKey::ClaimStore, claim_store);
}

pub fn load_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn load_claim_store(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::ClaimStore)
        .ok_or(Error::NotInitialized)
}

// -----------------------------------------------------------------------
// Verifier role
// -----------------------------------------------------------------------

pub fn set_verifier(env: &Env, identity: &Address, enabled: bool) {
    let key = DataKey::Verifier(identity.clone());
    if enabled {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

/// The admin always holds the verifier role.
pub fn has_verifier_role(env: &Env, admin: &Address, identity: &Address) -> bool {
    identity == admin
        || env
            .storage()
            .persistent()
            .get(&DataKey::Verifier(identity.clone()))
            .unwrap_or(false)
}

// -----------------------------------------------------------------------
// Verification records
// -----------------------------------------------------------------------

pub fn has_verification(env: &Env, claim_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Verification(claim_id.clone()))
}

pub fn load_verification(env: &Env, claim_id: &String) -> Option<VerificationRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Verification(claim_id.clone()))
}

/// Overwrites the current decision and appends it to the claim's history.
pub fn save_verification(env: &Env, claim_id: &String, record: &VerificationRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Verification(claim_id.clone()), record);

    let mut history = load_history(env, claim_id);
    history.push_back(record.clone());
    env.storage()
        .persistent()
        .set(&DataKey::History(claim_id.clone()), &history);
}

pub fn load_history(env: &Env, claim_id: &String) -> Vec<VerificationRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::History(claim_id.clone()))
        .unwrap_or(Vec::new(env))
}

// -----------------------------------------------------------------------
// Policy index
// -----------------------------------------------------------------------

pub fn add_policy_claim(env: &Env, policy_number: &String, claim_id: &String) {
    let count = load_policy_claim_count(env, policy_number);
    env.storage()
        .persistent()
        .set(&DataKey::PolicyClaimCount(policy_number.clone()), &(count + 1));

    let mut ids = load_policy_claims(env, policy_number);
    ids.push_back(claim_id.clone());
    env.storage()
        .persistent()
        .set(&DataKey::PolicyClaims(policy_number.clone()), &ids);
}

pub fn load_policy_claim_count(env: &Env, policy_number: &String) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::PolicyClaimCount(policy_number.clone()))
        .unwrap_or(0)
}

pub fn load_policy_claims(env: &Env, policy_number: &String) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::PolicyClaims(policy_number.clone()))
        .unwrap_or(Vec::new(env))
}
