use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotAuthorized = 3,
    ClaimNotFound = 4,
    VerificationNotFound = 5,
    OrderingConflict = 6,
}

/// Outcome of a verification. The numeric values are the ones clients send
/// and receive.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VerificationStatus {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

/// A verification decision recorded against a claim.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationRecord {
    pub status: VerificationStatus,
    pub verification_date: u64,
    pub reason: String,
    pub verifier: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    /// Address of the claim store contract.
    ClaimStore,
    /// identity -> bool
    Verifier(Address),
    /// claim_id -> VerificationRecord (latest decision)
    Verification(String),
    /// claim_id -> Vec<VerificationRecord>, oldest first
    History(String),
    /// policy_number -> u32
    PolicyClaimCount(String),
    /// policy_number -> Vec<String> (claim ids, first verification order)
    PolicyClaims(String),
}
