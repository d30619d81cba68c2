//! Wire constants for the case log format.
//!
//! Layout of a well-formed log (integers big-endian, strings UTF-8, all
//! digests RIPEMD-160/20 bytes):
//!
//! ```text
//! "INTC" | version[4] = 01 00 00 00
//! u16 caseLen | digest[20] | case-payload[caseLen]
//! ( "INTJ" | u16 jobLen | digest[20] | job-payload[jobLen] )*
//! "INTE" | chainDigest[20]
//! ```

/// Stream preamble; doubles as the case frame marker.
pub const CASE_MARKER: [u8; 4] = *b"INTC";

/// Job frame marker.
pub const JOB_MARKER: [u8; 4] = *b"INTJ";

/// Postamble marker terminating the log.
pub const POSTAMBLE_MARKER: [u8; 4] = *b"INTE";

/// The only supported format version.
pub const FORMAT_VERSION: [u8; 4] = [1, 0, 0, 0];

/// Width of a frame marker or the version field.
pub const MARKER_LEN: usize = 4;

/// Width of a payload length prefix (u16 big-endian).
pub const LENGTH_LEN: usize = 2;
