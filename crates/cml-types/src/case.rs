use serde::{Deserialize, Serialize};

use crate::arguments::ArgumentMap;
use crate::digest::Digest;

/// One recorded codemod execution.
///
/// Exactly one case opens a well-formed log; the job frames that follow all
/// belong to it. `created_at` is the producer's signed epoch-milliseconds
/// timestamp and is carried verbatim, with no clock interpretation here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// The case's identity digest.
    pub digest: Digest,
    /// Digest identifying the codemod that was executed.
    pub codemod_digest: Digest,
    /// Producer-owned creation timestamp (milliseconds since epoch).
    pub created_at: i64,
    /// Absolute path of the directory or file the codemod targeted.
    pub target_path: String,
    /// The arguments the codemod was invoked with.
    pub arguments: ArgumentMap,
}
