use soroban_sdk::{contracterror, contracttype, Address, String};

use claims_common::SearchField;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    ClaimNotFound = 1,
    DuplicateClaimId = 2,
    InvalidPolicyType = 3,
    KeyAlreadySet = 4,
    KeyNotSet = 5,
    OrderingConflict = 6,
    InvalidClaim = 7,
    FieldTooLong = 8,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Auto-increment counter for submission receipts.
    ReceiptCounter,
    /// claim_id -> ClaimRecord
    Claim(String),
    /// Vec<String> of every claim_id, in storage order
    ClaimIds,
    /// claimant -> Vec<String> (claim ids)
    OwnerClaims(Address),
    /// (field, exact value) -> Vec<String> (claim ids)
    Index(SearchField, String),
    /// owner -> BytesN<32>
    EncryptionKey(Address),
}
