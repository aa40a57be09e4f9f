use soroban_sdk::{contracttype, Address, BytesN, Env, String};

/// Line of business a claim was filed under. Fixed at submission.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PolicyType {
    Auto,
    Health,
    Life,
}

impl PolicyType {
    /// Parses the wire label used by submitting clients (`AUTO`, `HEALTH`,
    /// `LIFE`). Matching is exact.
    pub fn from_label(env: &Env, label: &String) -> Option<PolicyType> {
        [PolicyType::Auto, PolicyType::Health, PolicyType::Life]
            .into_iter()
            .find(|policy_type| String::from_str(env, policy_type.label()) == *label)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PolicyType::Auto => "AUTO",
            PolicyType::Health => "HEALTH",
            PolicyType::Life => "LIFE",
        }
    }
}

/// Fields common to every policy type.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimBase {
    pub ledger_id: String,
    pub policy_number: String,
    pub claim_id: String,
    pub claimant_name: String,
    pub insurer_name: String,
    pub claim_status: u32,
    pub claim_date: u64,
    pub claim_amount: i128,
    pub settlement_amount: i128,
    pub settlement_date: u64,
    pub fraud_score: u32,
    pub pincode: u32,
    pub city: String,
    pub state: String,
    pub cause_proof: String,
    pub cause_statement: String,
    pub third_party_involvement: bool,
    pub error_codes: String,
    pub claim_processing_time: u64,
    pub supporting_documents: String,
    pub reason_for_claim: String,
}

/// Identity fields as supplied by the claimant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContactDetails {
    pub phone_number: String,
    pub email_id: String,
    pub aadhar_id: String,
}

/// Identity fields after masking: `keccak256(plaintext) XOR key`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObfuscatedContact {
    pub phone_number: BytesN<32>,
    pub email_id: BytesN<32>,
    pub aadhar_id: BytesN<32>,
}

/// How the identity fields of a stored claim are held. Claimants with an
/// encryption key on file get `Obfuscated`, everyone else `Plain`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContactInfo {
    Plain(ContactDetails),
    Obfuscated(ObfuscatedContact),
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ContactField {
    PhoneNumber,
    EmailId,
    AadharId,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AutoDetails {
    pub vehicle_registration_no: String,
    pub vehicle_type: u32,
    pub vehicle_make_and_model: String,
    pub car_bike_age: u32,
    pub accident_date: u64,
    pub accident_location: String,
    pub garage_name: String,
    pub repair_estimate: i128,
    pub driving_behavior_data: String,
    pub iot_data_available: bool,
    /// When false, no later claim may be filed against the same vehicle.
    pub multiple_claim_allowed: bool,
    pub eligible_for_more_claim: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HealthDetails {
    pub abha_id: String,
    pub hospital_name: String,
    pub diagnosis_or_illness: String,
    pub hospitalization_start_date: u64,
    pub hospitalization_end_date: u64,
    pub total_medical_expenses: i128,
    pub pre_approved_amount: i128,
    pub hospital_bills: String,
    pub test_reports: String,
    pub initial_analysis: String,
    pub final_analysis: String,
    pub iot_data_available: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LifeDetails {
    pub nominee_name: String,
    pub policy_coverage: i128,
}

/// Policy-type specific payload of a claim.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClaimDetails {
    Auto(AutoDetails),
    Health(HealthDetails),
    Life(LifeDetails),
}

impl ClaimDetails {
    pub fn policy_type(&self) -> PolicyType {
        match self {
            ClaimDetails::Auto(_) => PolicyType::Auto,
            ClaimDetails::Health(_) => PolicyType::Health,
            ClaimDetails::Life(_) => PolicyType::Life,
        }
    }
}

/// A stored claim.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimRecord {
    pub receipt_id: u64,
    pub claimant: Address,
    pub policy_type: PolicyType,
    pub base: ClaimBase,
    pub contact: ContactInfo,
    pub details: ClaimDetails,
    pub submitted_at: u64,
}

impl ClaimRecord {
    pub fn claim_id(&self) -> &String {
        &self.base.claim_id
    }

    pub fn auto_details(&self) -> Option<&AutoDetails> {
        match &self.details {
            ClaimDetails::Auto(auto) => Some(auto),
            _ => None,
        }
    }
}

/// Claim attributes that can be searched with exact-match semantics.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SearchField {
    ClaimId,
    PolicyNumber,
    ClaimantName,
    InsurerName,
    LedgerId,
    VehicleRegistrationNo,
    City,
    PolicyType,
}
