use cml_types::Digest;
use ripemd::{Digest as _, Ripemd160};

/// RIPEMD-160 digest of a record payload.
pub fn record_digest(data: &[u8]) -> Digest {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    Digest::from_array(hasher.finalize().into())
}

/// Verify that a payload produces the stated digest.
pub fn verify_record(data: &[u8], stated: &Digest) -> bool {
    record_digest(data) == *stated
}
