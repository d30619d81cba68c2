use cml_types::Digest;
use ripemd::{Digest as _, Ripemd160};

/// Streaming hash chain over every frame digest in a case log.
///
/// The verifier accumulates the raw digest bytes of each case/job frame in
/// arrival order and produces one RIPEMD-160 digest for the whole stream.
/// Comparing it with the trailing postamble digest detects reordering,
/// omission, or duplication of frames even when each frame's own content
/// digest is individually valid.
///
/// `finish` consumes the verifier, so the chain digest is taken exactly
/// once per stream.
#[derive(Default)]
pub struct HashChainVerifier {
    hasher: Ripemd160,
}

impl HashChainVerifier {
    /// Create a verifier with an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame digest into the chain, in arrival order.
    pub fn observe(&mut self, digest: &Digest) {
        self.hasher.update(digest.as_bytes());
    }

    /// Consume the verifier and produce the chain digest.
    pub fn finish(self) -> Digest {
        Digest::from_array(self.hasher.finalize().into())
    }
}
