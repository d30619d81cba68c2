//! Wire format for the Codemod Case Log.
//!
//! A case log is a binary, append-only stream written by the codemod CLI:
//! a preamble and version, one hash-verified case frame, zero or more
//! hash-verified job frames, and a postamble carrying a chain digest over
//! every frame digest. This crate decodes that stream incrementally.
//!
//! # Architecture
//!
//! - [`ByteCursor`] — all-or-nothing pulls over an incrementally-fed buffer
//! - [`FrameMachine`] — the protocol state machine, one pull per state
//! - [`decode_case`] / [`decode_job`] — digest-first record decoding
//! - [`LogError`] — the Format / Integrity / Decode failure taxonomy
//!
//! The decoder never emits a partially-validated record: a frame's digest
//! is checked before field extraction, and the chain digest is checked
//! before the end of the stream is acknowledged.

pub mod cursor;
pub mod error;
pub mod frame;
pub mod record;
pub mod wire;

pub use cursor::ByteCursor;
pub use error::{ErrorKind, LogError};
pub use frame::{FrameEvent, FrameMachine, Step};
pub use record::{decode_case, decode_job};
