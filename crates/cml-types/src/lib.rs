//! Foundation types for the Codemod Case Log (CML).
//!
//! This crate provides the record types reconstructed from a case log
//! stream. Every other CML crate depends on `cml-types`.
//!
//! # Key Types
//!
//! - [`Digest`] — 20-byte RIPEMD-160 digest, shown to consumers as base64url text
//! - [`Case`] — one recorded codemod execution
//! - [`Job`] — one file-level change produced within a case
//! - [`JobKind`] — the wire-coded change kind (rewrite, create, delete, ...)
//! - [`ArgumentValue`] — string/number/boolean values of a case's argument record
//!
//! All values are produced by a successful decode pass and never mutated
//! afterwards.

pub mod arguments;
pub mod case;
pub mod digest;
pub mod error;
pub mod job;

pub use arguments::{ArgumentMap, ArgumentValue};
pub use case::Case;
pub use digest::Digest;
pub use error::TypeError;
pub use job::{Job, JobKind};
