//! Stream driver for the Codemod Case Log.
//!
//! [`LogReader`] owns one frame machine per stream, is fed raw chunks by
//! an external byte source, and publishes [`LogEvent`]s: the decoded case,
//! its jobs, and exactly one terminal `Error` or `End` per stream.
//!
//! The driver is single-threaded and cooperative. It suspends whenever the
//! buffered bytes cannot complete the current frame and resumes on the
//! next [`feed`](LogReader::feed). End-of-source is reported explicitly
//! via [`finish`](LogReader::finish); wall-clock timeout policy belongs to
//! the calling layer.

pub mod event;
pub mod reader;

pub use event::LogEvent;
pub use reader::{CaseLog, LogReader};
