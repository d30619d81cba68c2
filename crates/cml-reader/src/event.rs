use cml_codec::LogError;
use cml_types::{Case, Job};

/// A discrete notification published while decoding one case log stream.
///
/// `Error` and `End` are terminal: exactly one of them is published per
/// stream, and nothing follows it. This replaces the event-emitter shape
/// of older readers with an explicit sum type.
#[derive(Clone, Debug, PartialEq)]
pub enum LogEvent {
    /// The case record opening the log.
    Case(Case),
    /// One job record.
    Job(Job),
    /// The stream is poisoned; no further events.
    Error(LogError),
    /// The postamble verified; the log is complete.
    End,
}

impl LogEvent {
    /// Returns `true` for the at-most-one terminal event of a stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Error(_) | Self::End)
    }
}
