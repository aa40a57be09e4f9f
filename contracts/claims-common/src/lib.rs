#![no_std]

//! Data model and cross-contract plumbing shared by the claim store and the
//! claim verification contracts.

mod interface;
pub mod sequence;
mod types;


pub use interface::{ClaimStoreClient, ClaimStoreInterface};
pub use types::*;
