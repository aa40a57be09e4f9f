//! Per-identity request sequencing.
//!
//! Every mutating call carries the sequence number its caller believes is
//! next. A mismatch is reported back with the number the contract expects so
//! the caller can resynchronise and resubmit; nothing is written.

use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SequenceKey {
    RequestSequence(Address),
}

/// The sequence number the next mutating call from `identity` must present.
pub fn current(env: &Env, identity: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&SequenceKey::RequestSequence(identity.clone()))
        .unwrap_or(0)
}

/// Returns the expected number as the error when `presented` is out of order.
pub fn check(env: &Env, identity: &Address, presented: u64) -> Result<(), u64> {
    let expected = current(env, identity);
    if presented != expected {
        return Err(expected);
    }
    Ok(())
}

/// Consumes the current sequence number. Call only once the request has
/// passed every other check.
pub fn advance(env: &Env, identity: &Address) -> u64 {
    let next = current(env, identity) + 1;
    env.storage()
        .persistent()
        .set(&SequenceKey::RequestSequence(identity.clone()), &next);
    next
}
