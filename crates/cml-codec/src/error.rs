use cml_types::Digest;
use thiserror::Error;

/// Errors that poison a case log stream.
///
/// Every variant is terminal: the state machine halts permanently and no
/// further records are emitted. [`LogError::kind`] partitions the variants
/// into the three failure classes the protocol distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    #[error("not an Intuita case log")]
    BadPreamble,

    #[error("unsupported case log version: {0:?}")]
    UnsupportedVersion([u8; 4]),

    #[error("expected a job or postamble marker, got {found:?}")]
    UnexpectedMarker { found: [u8; 4] },

    #[error("record digest mismatch: stated {stated}, computed {computed}")]
    RecordDigestMismatch { stated: Digest, computed: Digest },

    #[error("chain digest mismatch: stated {stated}, computed {computed}")]
    ChainDigestMismatch { stated: Digest, computed: Digest },

    #[error("record too short: needed {needed} more bytes at offset {offset}")]
    ShortRecord { offset: usize, needed: usize },

    #[error("unknown job kind byte: {0}")]
    UnknownJobKind(u8),

    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    #[error("malformed argument record: {0}")]
    MalformedArguments(String),

    #[error("stream ended while awaiting {awaiting}")]
    UnexpectedEof { awaiting: &'static str },
}

/// The three failure classes of the protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structural violation: bad magic, bad version, unexpected marker,
    /// stream ended mid-frame.
    Format,
    /// A record's or the stream's digest does not match. Corruption.
    Integrity,
    /// A digest matched but the record's content is invalid.
    Decode,
}

impl LogError {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadPreamble
            | Self::UnsupportedVersion(_)
            | Self::UnexpectedMarker { .. }
            | Self::UnexpectedEof { .. } => ErrorKind::Format,
            Self::RecordDigestMismatch { .. } | Self::ChainDigestMismatch { .. } => {
                ErrorKind::Integrity
            }
            Self::ShortRecord { .. }
            | Self::UnknownJobKind(_)
            | Self::InvalidUtf8 { .. }
            | Self::MalformedArguments(_) => ErrorKind::Decode,
        }
    }
}
