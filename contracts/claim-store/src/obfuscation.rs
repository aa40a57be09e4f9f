//! Keyed masking of identity fields: `keccak256(plaintext) XOR key`.
//!
//! The transform cannot be inverted; a stored value can only be checked
//! against a candidate plaintext supplied by the caller.

use soroban_sdk::{Bytes, BytesN, Env, String};

use claims_common::{ContactDetails, ContactField, ObfuscatedContact};

use crate::types::Error;

/// Longest plaintext accepted for masking, in bytes.
const MAX_FIELD_LEN: usize = 256;

fn field_bytes(env: &Env, value: &String) -> Result<Bytes, Error> {
    let len = value.len() as usize;
    if len > MAX_FIELD_LEN {
        return Err(Error::FieldTooLong);
    }
    let mut buf = [0u8; MAX_FIELD_LEN];
    value.copy_into_slice(&mut buf[..len]);
    Ok(Bytes::from_slice(env, &buf[..len]))
}

fn xor(env: &Env, left: &BytesN<32>, right: &BytesN<32>) -> BytesN<32> {
    let left = left.to_array();
    let right = right.to_array();
    let mut out = [0u8; 32];
    for (byte, (l, r)) in out.iter_mut().zip(left.iter().zip(right.iter())) {
        *byte = l ^ r;
    }
    BytesN::from_array(env, &out)
}

pub fn obfuscate(env: &Env, value: &String, key: &BytesN<32>) -> Result<BytesN<32>, Error> {
    let digest = env.crypto().keccak256(&field_bytes(env, value)?).to_bytes();
    Ok(xor(env, &digest, key))
}

/// True when `candidate` masks to `obfuscated` under `key`. Plaintexts too
/// long to have been masked never match.
pub fn matches(env: &Env, obfuscated: &BytesN<32>, candidate: &String, key: &BytesN<32>) -> bool {
    match obfuscate(env, candidate, key) {
        Ok(masked) => masked == *obfuscated,
        Err(_) => false,
    }
}

pub fn obfuscate_contact(
    env: &Env,
    contact: &ContactDetails,
    key: &BytesN<32>,
) -> Result<ObfuscatedContact, Error> {
    Ok(ObfuscatedContact {
        phone_number: obfuscate(env, &contact.phone_number, key)?,
        email_id: obfuscate(env, &contact.email_id, key)?,
        aadhar_id: obfuscate(env, &contact.aadhar_id, key)?,
    })
}

pub fn plain_field(contact: &ContactDetails, field: ContactField) -> &String {
    match field {
        ContactField::PhoneNumber => &contact.phone_number,
        ContactField::EmailId => &contact.email_id,
        ContactField::AadharId => &contact.aadhar_id,
    }
}

pub fn masked_field(contact: &ObfuscatedContact, field: ContactField) -> &BytesN<32> {
    match field {
        ContactField::PhoneNumber => &contact.phone_number,
        ContactField::EmailId => &contact.email_id,
        ContactField::AadharId => &contact.aadhar_id,
    }
}
