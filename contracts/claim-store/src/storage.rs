use soroban_sdk::{Address, BytesN, Env, String, Vec};

use claims_common::{ClaimDetails, ClaimRecord, SearchField};

use crate::types::DataKey;

// -----------------------------------------------------------------------
// Counters
// -----------------------------------------------------------------------

pub fn next_receipt_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::ReceiptCounter)
        .unwrap_or(0);
    let next = id + 1;
    env.storage()
        .instance()
        .set(&DataKey::ReceiptCounter, &next);
    next
}

// -----------------------------------------------------------------------
// Claims
// -----------------------------------------------------------------------

pub fn has_claim(env: &Env, claim_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Claim(claim_id.clone()))
}

pub fn load_claim(env: &Env, claim_id: &String) -> Option<ClaimRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Claim(claim_id.clone()))
}

pub fn save_claim(env: &Env, record: &ClaimRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Claim(record.claim_id().clone()), record);

    let mut ids = load_claim_ids(env);
    ids.push_back(record.claim_id().clone());
    env.storage().persistent().set(&DataKey::ClaimIds, &ids);
}

pub fn load_claim_ids(env: &Env) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::ClaimIds)
        .unwrap_or(Vec::new(env))
}

/// Resolves claim ids to records, skipping ids with no record.
pub fn load_claims(env: &Env, ids: &Vec<String>) -> Vec<ClaimRecord> {
    let mut claims = Vec::new(env);
    for id in ids.iter() {
        if let Some(record) = load_claim(env, &id) {
            claims.push_back(record);
        }
    }
    claims
}

// -----------------------------------------------------------------------
// Owner claims
// -----------------------------------------------------------------------

pub fn add_owner_claim(env: &Env, owner: &Address, claim_id: &String) {
    let mut ids = load_owner_claims(env, owner);
    ids.push_back(claim_id.clone());
    env.storage()
        .persistent()
        .set(&DataKey::OwnerClaims(owner.clone()), &ids);
}

pub fn load_owner_claims(env: &Env, owner: &Address) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerClaims(owner.clone()))
        .unwrap_or(Vec::new(env))
}

// -----------------------------------------------------------------------
// Search indexes
// -----------------------------------------------------------------------

/// Adds a stored claim to the exact-match index of every searchable field.
/// Claim ids are resolved directly and need no index entry.
pub fn index_claim(env: &Env, record: &ClaimRecord) {
    let claim_id = record.claim_id();
    let base = &record.base;

    add_to_index(env, SearchField::PolicyNumber, &base.policy_number, claim_id);
    add_to_index(env, SearchField::ClaimantName, &base.claimant_name, claim_id);
    add_to_index(env, SearchField::InsurerName, &base.insurer_name, claim_id);
    add_to_index(env, SearchField::LedgerId, &base.ledger_id, claim_id);
    add_to_index(env, SearchField::City, &base.city, claim_id);
    add_to_index(
        env,
        SearchField::PolicyType,
        &String::from_str(env, record.policy_type.label()),
        claim_id,
    );

    if let ClaimDetails::Auto(auto) = &record.details {
        add_to_index(
            env,
            SearchField::VehicleRegistrationNo,
            &auto.vehicle_registration_no,
            claim_id,
        );
    }
}

fn add_to_index(env: &Env, field: SearchField, value: &String, claim_id: &String) {
    if value.is_empty() {
        return;
    }
    let mut ids = load_index(env, field, value);
    ids.push_back(claim_id.clone());
    env.storage()
        .persistent()
        .set(&DataKey::Index(field, value.clone()), &ids);
}

pub fn load_index(env: &Env, field: SearchField, value: &String) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::Index(field, value.clone()))
        .unwrap_or(Vec::new(env))
}

// -----------------------------------------------------------------------
// Encryption keys
// -----------------------------------------------------------------------

pub fn load_encryption_key(env: &Env, owner: &Address) -> Option<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::EncryptionKey(owner.clone()))
}

pub fn save_encryption_key(env: &Env, owner: &Address, key: &BytesN<32>) {
    env.storage()
        .persistent()
        .set(&DataKey::EncryptionKey(owner.clone()), key);
}
