use soroban_sdk::{contractclient, Env, String, Vec};

use crate::types::{ClaimRecord, SearchField};

/// Read side of the claim store that other contracts call into.
#[contractclient(name = "ClaimStoreClient")]
pub trait ClaimStoreInterface {
    /// Looks up a claim by its claim id.
    fn find_claim(env: Env, claim_id: String) -> Option<ClaimRecord>;

    /// Auto claims filed against a vehicle, in storage order.
    fn claims_for_vehicle(env: Env, vehicle_registration_no: String) -> Vec<ClaimRecord>;

    /// Every stored claim, in storage order.
    fn list_claims(env: Env) -> Vec<ClaimRecord>;

    /// Claims whose `field` equals `param` exactly, in storage order.
    fn search_claims(env: Env, param: String, field: SearchField) -> Vec<ClaimRecord>;
}
