use tracing::{debug, warn};

use cml_codec::{ByteCursor, FrameEvent, FrameMachine, LogError, Step};
use cml_types::{Case, Job};

use crate::event::LogEvent;

/// Push-driven reader for one case log stream.
///
/// The byte source feeds chunks in as they arrive; the reader drives the
/// frame machine until it suspends on an incomplete frame or reaches a
/// terminal condition. One reader exists per stream and shares nothing
/// with other streams.
///
/// Terminal discipline: after an `Error` or `End` event, or after
/// [`close`](Self::close), the reader publishes nothing further no matter
/// what is fed in. Timeout policy belongs to the caller; the reader only
/// reports end-of-source when told via [`finish`](Self::finish).
pub struct LogReader {
    cursor: ByteCursor,
    machine: FrameMachine,
    closed: bool,
}

impl LogReader {
    /// A reader at the start of a fresh stream.
    pub fn new() -> Self {
        Self {
            cursor: ByteCursor::new(),
            machine: FrameMachine::new(),
            closed: false,
        }
    }

    /// Feed one chunk from the byte source and return every event it
    /// produced, in order. A closed reader returns nothing.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<LogEvent> {
        if self.closed {
            return Vec::new();
        }
        self.cursor.push(chunk);
        self.drive()
    }

    /// The byte source reached end-of-stream.
    ///
    /// Remaining buffered bytes are driven first. If the machine is still
    /// mid-frame afterwards the stream was truncated, and the reader
    /// publishes a single `UnexpectedEof` error instead of stalling
    /// forever. A reader that already terminated returns nothing.
    pub fn finish(&mut self) -> Vec<LogEvent> {
        if self.closed {
            return Vec::new();
        }
        let mut events = self.drive();
        if !self.closed {
            self.closed = true;
            let err = LogError::UnexpectedEof {
                awaiting: self.machine.awaiting(),
            };
            warn!(error = %err, "byte source ended mid-stream");
            events.push(LogEvent::Error(err));
        }
        events
    }

    /// Cooperative cancellation: discard in-flight state without
    /// validating the chain and without publishing an error.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Returns `true` once the stream has terminated or been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn drive(&mut self) -> Vec<LogEvent> {
        let mut events = Vec::new();
        while !self.closed {
            match self.machine.step(&mut self.cursor) {
                Ok(Step::Pending) => break,
                Ok(Step::Advanced(None)) => {}
                Ok(Step::Advanced(Some(FrameEvent::Case(case)))) => {
                    debug!(case = %case.digest, path = %case.target_path, "decoded case record");
                    events.push(LogEvent::Case(case));
                }
                Ok(Step::Advanced(Some(FrameEvent::Job(job)))) => {
                    debug!(job = %job.digest, kind = %job.kind, "decoded job record");
                    events.push(LogEvent::Job(job));
                }
                Ok(Step::Advanced(Some(FrameEvent::End))) => {
                    debug!("case log complete");
                    self.closed = true;
                    events.push(LogEvent::End);
                }
                Err(err) => {
                    warn!(error = %err, "case log stream poisoned");
                    self.closed = true;
                    events.push(LogEvent::Error(err));
                }
            }
        }
        events
    }
}

impl Default for LogReader {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully-decoded case log: the case and its jobs in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseLog {
    pub case: Case,
    pub jobs: Vec<Job>,
}

impl CaseLog {
    /// One-shot decode of a complete buffer.
    ///
    /// Fails on any stream error, including a buffer that ends mid-frame.
    pub fn decode(bytes: &[u8]) -> Result<Self, LogError> {
        let mut reader = LogReader::new();
        let mut events = reader.feed(bytes);
        events.extend(reader.finish());

        let mut case = None;
        let mut jobs = Vec::new();
        for event in events {
            match event {
                LogEvent::Case(c) => case = Some(c),
                LogEvent::Job(j) => jobs.push(j),
                LogEvent::Error(err) => return Err(err),
                LogEvent::End => break,
            }
        }
        match case {
            Some(case) => Ok(Self { case, jobs }),
            // The machine publishes the case before it can reach the end.
            None => Err(LogError::UnexpectedEof {
                awaiting: "the case record",
            }),
        }
    }
}
