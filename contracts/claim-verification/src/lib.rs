#![no_std]

mod duplicate;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol, Vec};

use claims_common::{sequence, ClaimRecord, ClaimStoreClient, SearchField};
pub use duplicate::{detect_duplicate, find_conflicting_claim};
use storage::*;
pub use types::{Error, VerificationRecord, VerificationStatus};

#[contract]
pub struct ClaimVerificationContract;

#[contractimpl]
impl ClaimVerificationContract {
    /// Bind the contract to its admin and claim store. Can only run once.
    pub fn initialize(env: Env, admin: Address, claim_store: Address) -> Result<(), Error> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        save_config(&env, &admin, &claim_store);

        env.events().publish((Symbol::new(&env, "initialized"),), (admin, claim_store));

        Ok(())
    }

    /// Grant the verifier role.
    pub fn add_verifier(env: Env, admin: Address, verifier: Address) -> Result<(), Error> {
        admin.require_auth();

        if admin != load_admin(&env)? {
            return Err(Error::NotAuthorized);
        }

        set_verifier(&env, &verifier, true);

        env.events().publish((Symbol::new(&env, "verifier_added"),), verifier);

        Ok(())
    }

    pub fn remove_verifier(env: Env, admin: Address, verifier: Address) -> Result<(), Error> {
        admin.require_auth();

        if admin != load_admin(&env)? {
            return Err(Error::NotAuthorized);
        }

        set_verifier(&env, &verifier, false);

        env.events().publish((Symbol::new(&env, "verifier_removed"),), verifier);

        Ok(())
    }

    pub fn is_verifier(env: Env, identity: Address) -> Result<bool, Error> {
        let admin = load_admin(&env)?;
        Ok(has_verifier_role(&env, &admin, &identity))
    }

    /// Record a verification decision for a stored claim and return the
    /// status that was actually written.
    ///
    /// Auto claims that share a vehicle with any other stored claim under a
    /// single-claim policy are written as `Rejected` whatever `status` asked for.
    /// Every call overwrites the current decision and is appended to the
    /// claim's history. The first decision for a claim counts it under
    /// `policy_number`.
    pub fn verify_claim(
        env: Env,
        verifier: Address,
        sequence: u64,
        claim_id: String,
        policy_number: String,
        status: VerificationStatus,
        reason: String,
    ) -> Result<VerificationStatus, Error> {
        verifier.require_auth();

        let admin = load_admin(&env)?;
        if !has_verifier_role(&env, &admin, &verifier) {
            return Err(Error::NotAuthorized);
        }

        sequence::check(&env, &verifier, sequence).map_err(|_| Error::OrderingConflict)?;

        let store = ClaimStoreClient::new(&env, &load_claim_store(&env)?);
        let claim = store.find_claim(&claim_id).ok_or(Error::ClaimNotFound)?;

        let conflict = match claim.auto_details() {
            Some(auto) => find_conflicting_claim(
                &claim,
                &store.claims_for_vehicle(&auto.vehicle_registration_no),
            ),
            None => None,
        };

        let effective = if conflict.is_some() {
            VerificationStatus::Rejected
        } else {
            status
        };

        sequence::advance(&env, &verifier);

        let first_verification = !has_verification(&env, &claim_id);

        let record = VerificationRecord {
            status: effective,
            verification_date: env.ledger().timestamp(),
            reason,
            verifier: verifier.clone(),
        };
        save_verification(&env, &claim_id, &record);

        if first_verification {
            add_policy_claim(&env, &policy_number, &claim_id);
        }

        if let Some(prior_claim_id) = conflict {
            log!(&env, "duplicate vehicle claim", claim_id, prior_claim_id);

            env.events().publish(
                (Symbol::new(&env, "duplicate_detected"),),
                (claim_id.clone(), prior_claim_id),
            );
        }

        env.events().publish(
            (Symbol::new(&env, "claim_verified"),),
            (claim_id, effective, verifier),
        );

        Ok(effective)
    }

    /// Latest decision for a claim.
    pub fn get_claim_verification_status(
        env: Env,
        claim_id: String,
    ) -> Result<VerificationRecord, Error> {
        load_verification(&env, &claim_id).ok_or(Error::VerificationNotFound)
    }

    pub fn is_claim_verified(env: Env, claim_id: String) -> bool {
        load_verification(&env, &claim_id)
            .map_or(false, |record| record.status == VerificationStatus::Approved)
    }

    /// Every decision recorded for a claim, oldest first.
    pub fn get_verification_history(env: Env, claim_id: String) -> Vec<VerificationRecord> {
        load_history(&env, &claim_id)
    }

    pub fn get_policy_claim_count(env: Env, policy_number: String) -> u32 {
        load_policy_claim_count(&env, &policy_number)
    }

    /// Claims counted under a policy, in the order they were first verified.
    pub fn get_claims_for_policy(env: Env, policy_number: String) -> Vec<String> {
        load_policy_claims(&env, &policy_number)
    }

    pub fn get_all_claims(env: Env) -> Result<Vec<ClaimRecord>, Error> {
        let store = ClaimStoreClient::new(&env, &load_claim_store(&env)?);
        Ok(store.list_claims())
    }

    /// Exact-match search over stored claims. No pagination.
    pub fn search_claims(
        env: Env,
        param: String,
        field: SearchField,
    ) -> Result<Vec<ClaimRecord>, Error> {
        let store = ClaimStoreClient::new(&env, &load_claim_store(&env)?);
        Ok(store.search_claims(&param, &field))
    }

    pub fn get_sequence(env: Env, identity: Address) -> u64 {
        sequence::current(&env, &identity)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        load_admin(&env)
    }

    pub fn get_claim_store(env: Env) -> Result<Address, Error> {
        load_claim_store(&env)
    }
}
