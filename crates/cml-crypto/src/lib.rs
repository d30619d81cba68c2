//! Cryptographic primitives for the Codemod Case Log.
//!
//! Provides RIPEMD-160 record hashing and streaming hash chain
//! verification, matching the digests the codemod CLI writes into the log.
//!
//! All crypto operations wrap established libraries — no custom cryptography.

pub mod chain;
pub mod hasher;

pub use chain::HashChainVerifier;
pub use hasher::{record_digest, verify_record};
