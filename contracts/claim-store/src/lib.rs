#![no_std]

mod obfuscation;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String, Symbol, Vec};

use claims_common::{
    sequence, ClaimBase, ClaimDetails, ClaimRecord, ClaimStoreInterface, ContactDetails,
    ContactField, ContactInfo, PolicyType, SearchField,
};
use storage::*;
pub use types::Error;

#[contract]
pub struct ClaimStoreContract;

#[contractimpl]
impl ClaimStoreContract {
    /// Store a new claim and return its submission receipt id.
    ///
    /// `policy_type` is the client's label (`AUTO`, `HEALTH`, `LIFE`) and
    /// must agree with the `details` variant. Contact fields are masked with
    /// the claimant's encryption key when one is on file.
    pub fn submit_claim(
        env: Env,
        claimant: Address,
        sequence: u64,
        policy_type: String,
        base: ClaimBase,
        contact: ContactDetails,
        details: ClaimDetails,
    ) -> Result<u64, Error> {
        claimant.require_auth();

        sequence::check(&env, &claimant, sequence).map_err(|_| Error::OrderingConflict)?;

        let policy_type = PolicyType::from_label(&env, &policy_type)
            .filter(|declared| *declared == details.policy_type())
            .ok_or(Error::InvalidPolicyType)?;

        if base.claim_id.is_empty() || base.policy_number.is_empty() {
            return Err(Error::InvalidClaim);
        }
        if let ClaimDetails::Auto(auto) = &details {
            if auto.vehicle_registration_no.is_empty() {
                return Err(Error::InvalidClaim);
            }
        }

        if has_claim(&env, &base.claim_id) {
            return Err(Error::DuplicateClaimId);
        }

        let contact = match load_encryption_key(&env, &claimant) {
            Some(key) => {
                ContactInfo::Obfuscated(obfuscation::obfuscate_contact(&env, &contact, &key)?)
            }
            None => ContactInfo::Plain(contact),
        };

        sequence::advance(&env, &claimant);
        let receipt_id = next_receipt_id(&env);

        let record = ClaimRecord {
            receipt_id,
            claimant: claimant.clone(),
            policy_type,
            base,
            contact,
            details,
            submitted_at: env.ledger().timestamp(),
        };

        save_claim(&env, &record);
        index_claim(&env, &record);
        add_owner_claim(&env, &claimant, record.claim_id());

        log!(&env, "claim stored", record.base.claim_id, receipt_id);

        env.events().publish(
            (Symbol::new(&env, "claim_submitted"),),
            (record.base.claim_id.clone(), receipt_id, claimant),
        );

        Ok(receipt_id)
    }

    pub fn get_claim(env: Env, claim_id: String) -> Result<ClaimRecord, Error> {
        load_claim(&env, &claim_id).ok_or(Error::ClaimNotFound)
    }

    /// Latest claim submitted by `owner`.
    pub fn get_claim_info(env: Env, owner: Address) -> Result<ClaimRecord, Error> {
        let ids = load_owner_claims(&env, &owner);
        let latest = ids.last().ok_or(Error::ClaimNotFound)?;
        load_claim(&env, &latest).ok_or(Error::ClaimNotFound)
    }

    pub fn get_owner_claims(env: Env, owner: Address) -> Vec<String> {
        load_owner_claims(&env, &owner)
    }

    /// Mask `value` the way stored contact fields are masked.
    pub fn obfuscate(env: Env, value: String, key: BytesN<32>) -> Result<BytesN<32>, Error> {
        obfuscation::obfuscate(&env, &value, &key)
    }

    /// Check that `obfuscated` is `candidate` masked with `key`.
    pub fn verify_data(
        env: Env,
        obfuscated: BytesN<32>,
        candidate: String,
        key: BytesN<32>,
    ) -> bool {
        obfuscation::matches(&env, &obfuscated, &candidate, &key)
    }

    /// Check a stored contact field against a candidate plaintext. Masked
    /// fields are checked with the claimant's current key, so fields masked
    /// before a rotation no longer match.
    pub fn verify_contact_field(
        env: Env,
        claim_id: String,
        field: ContactField,
        candidate: String,
    ) -> Result<bool, Error> {
        let record = load_claim(&env, &claim_id).ok_or(Error::ClaimNotFound)?;

        match &record.contact {
            ContactInfo::Plain(details) => {
                Ok(*obfuscation::plain_field(details, field) == candidate)
            }
            ContactInfo::Obfuscated(masked) => {
                let key = load_encryption_key(&env, &record.claimant).ok_or(Error::KeyNotSet)?;
                Ok(obfuscation::matches(
                    &env,
                    obfuscation::masked_field(masked, field),
                    &candidate,
                    &key,
                ))
            }
        }
    }

    /// Register the key used to mask `owner`'s future submissions. A key can
    /// only be set once; use `rotate_encryption_key` to replace it.
    pub fn set_encryption_key(
        env: Env,
        owner: Address,
        sequence: u64,
        key: BytesN<32>,
    ) -> Result<(), Error> {
        owner.require_auth();

        sequence::check(&env, &owner, sequence).map_err(|_| Error::OrderingConflict)?;

        if load_encryption_key(&env, &owner).is_some() {
            return Err(Error::KeyAlreadySet);
        }

        sequence::advance(&env, &owner);
        save_encryption_key(&env, &owner, &key);

        env.events().publish((Symbol::new(&env, "key_set"),), owner);

        Ok(())
    }

    /// Replace `owner`'s key. Claims masked under the old key are not
    /// re-masked.
    pub fn rotate_encryption_key(
        env: Env,
        owner: Address,
        sequence: u64,
        key: BytesN<32>,
    ) -> Result<(), Error> {
        owner.require_auth();

        sequence::check(&env, &owner, sequence).map_err(|_| Error::OrderingConflict)?;

        if load_encryption_key(&env, &owner).is_none() {
            return Err(Error::KeyNotSet);
        }

        sequence::advance(&env, &owner);
        save_encryption_key(&env, &owner, &key);

        env.events().publish((Symbol::new(&env, "key_rotated"),), owner);

        Ok(())
    }

    pub fn has_encryption_key(env: Env, owner: Address) -> bool {
        load_encryption_key(&env, &owner).is_some()
    }

    /// Sequence number the next mutating call from `identity` must carry.
    pub fn get_sequence(env: Env, identity: Address) -> u64 {
        sequence::current(&env, &identity)
    }
}

#[contractimpl]
impl ClaimStoreInterface for ClaimStoreContract {
    fn find_claim(env: Env, claim_id: String) -> Option<ClaimRecord> {
        load_claim(&env, &claim_id)
    }

    fn claims_for_vehicle(env: Env, vehicle_registration_no: String) -> Vec<ClaimRecord> {
        let ids = load_index(&env, SearchField::VehicleRegistrationNo, &vehicle_registration_no);
        load_claims(&env, &ids)
    }

    fn list_claims(env: Env) -> Vec<ClaimRecord> {
        load_claims(&env, &load_claim_ids(&env))
    }

    fn search_claims(env: Env, param: String, field: SearchField) -> Vec<ClaimRecord> {
        match field {
            SearchField::ClaimId => {
                let mut claims = Vec::new(&env);
                if let Some(record) = load_claim(&env, &param) {
                    claims.push_back(record);
                }
                claims
            }
            _ => load_claims(&env, &load_index(&env, field, &param)),
        }
    }
}
