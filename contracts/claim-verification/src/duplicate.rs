//! Duplicate-vehicle detection for auto claims.

use soroban_sdk::{String, Vec};

use claims_common::ClaimRecord;

/// Finds the first claim in `existing` (storage order) that blocks
/// `new_claim`: another auto claim on the same vehicle whose policy does not
/// allow multiple claims.
///
/// Health and life claims never conflict.
pub fn find_conflicting_claim(
    new_claim: &ClaimRecord,
    existing: &Vec<ClaimRecord>,
) -> Option<String> {
    let vehicle = &new_claim.auto_details()?.vehicle_registration_no;

    existing
        .iter()
        .find(|prior| {
            prior.claim_id() != new_claim.claim_id()
                && prior.auto_details().map_or(false, |auto| {
                    auto.vehicle_registration_no == *vehicle && !auto.multiple_claim_allowed
                })
        })
        .map(|prior| prior.base.claim_id)
}

pub fn detect_duplicate(new_claim: &ClaimRecord, existing: &Vec<ClaimRecord>) -> bool {
    find_conflicting_claim(new_claim, existing).is_some()
}
