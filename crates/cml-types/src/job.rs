use std::fmt;

use serde::{Deserialize, Serialize};

use crate::digest::Digest;

/// Kind of file-level change recorded in a job frame.
///
/// The discriminants are the single-byte wire codes written by the CLI.
/// All six kinds decode; which kinds translate into actionable work is the
/// downstream collaborator's decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobKind {
    RewriteFile,
    CreateFile,
    DeleteFile,
    MoveFile,
    MoveAndRewriteFile,
    CopyFile,
}

impl JobKind {
    /// Parse a wire code. Returns `None` for unknown bytes.
    pub fn from_wire(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::RewriteFile),
            2 => Some(Self::CreateFile),
            3 => Some(Self::DeleteFile),
            4 => Some(Self::MoveFile),
            5 => Some(Self::MoveAndRewriteFile),
            6 => Some(Self::CopyFile),
            _ => None,
        }
    }

    /// The single-byte wire code for this kind.
    pub fn wire_code(&self) -> u8 {
        match self {
            Self::RewriteFile => 1,
            Self::CreateFile => 2,
            Self::DeleteFile => 3,
            Self::MoveFile => 4,
            Self::MoveAndRewriteFile => 5,
            Self::CopyFile => 6,
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RewriteFile => write!(f, "rewriteFile"),
            Self::CreateFile => write!(f, "createFile"),
            Self::DeleteFile => write!(f, "deleteFile"),
            Self::MoveFile => write!(f, "moveFile"),
            Self::MoveAndRewriteFile => write!(f, "moveAndRewriteFile"),
            Self::CopyFile => write!(f, "copyFile"),
        }
    }
}

/// One file-level change produced within a case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// The job's identity digest.
    pub digest: Digest,
    /// The kind of change.
    pub kind: JobKind,
    /// URI of the file before the change.
    pub old_uri: String,
    /// URI of the file after the change.
    pub new_uri: String,
}
