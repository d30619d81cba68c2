use cml_crypto::HashChainVerifier;
use cml_types::{Case, Digest, Job};

use crate::cursor::ByteCursor;
use crate::error::LogError;
use crate::record;
use crate::wire;

/// A record or end-of-stream notification produced by one machine step.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameEvent {
    Case(Case),
    Job(Job),
    End,
}

/// Result of driving the machine one step.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// One state transition happened, possibly producing an event.
    Advanced(Option<FrameEvent>),
    /// Not enough buffered bytes; nothing was consumed or changed.
    Pending,
}

/// Protocol states, tagged with the data carried between reads.
///
/// Each state performs exactly one `pull`, so an unavailable pull suspends
/// the machine with no partial side effects and the identical state is
/// re-driven on the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FrameState {
    Preamble,
    Version,
    CaseLength,
    CaseDigest { payload_len: usize },
    CasePayload { payload_len: usize, digest: Digest },
    JobOrPostamble,
    JobLength,
    JobDigest { payload_len: usize },
    JobPayload { payload_len: usize, digest: Digest },
    ChainDigest,
    Terminal,
}

/// The case log protocol state machine.
///
/// Recognizes the preamble and version, decodes one case frame, loops over
/// zero or more job frames, and verifies the trailing chain digest. Any
/// error is terminal: the machine poisons itself and steps no further.
pub struct FrameMachine {
    state: FrameState,
    chain: HashChainVerifier,
}

impl FrameMachine {
    /// A machine at the start of a fresh stream.
    pub fn new() -> Self {
        Self {
            state: FrameState::Preamble,
            chain: HashChainVerifier::new(),
        }
    }

    /// Returns `true` once the machine has ended or failed; a terminal
    /// machine makes no further progress.
    pub fn is_terminal(&self) -> bool {
        self.state == FrameState::Terminal
    }

    /// Human-readable name of what the machine is waiting for, used to
    /// describe a stream that ended mid-frame.
    pub fn awaiting(&self) -> &'static str {
        match self.state {
            FrameState::Preamble => "the stream preamble",
            FrameState::Version => "the format version",
            FrameState::CaseLength => "the case payload length",
            FrameState::CaseDigest { .. } => "the case digest",
            FrameState::CasePayload { .. } => "the case payload",
            FrameState::JobOrPostamble => "a job or postamble marker",
            FrameState::JobLength => "the job payload length",
            FrameState::JobDigest { .. } => "the job digest",
            FrameState::JobPayload { .. } => "the job payload",
            FrameState::ChainDigest => "the chain digest",
            FrameState::Terminal => "nothing",
        }
    }

    /// Drive the machine one state transition.
    ///
    /// Returns `Step::Pending` when the cursor cannot satisfy the state's
    /// pull (including on a terminal machine). An `Err` poisons the
    /// machine permanently.
    pub fn step(&mut self, cursor: &mut ByteCursor) -> Result<Step, LogError> {
        let (next, event) = match self.state {
            FrameState::Preamble => {
                let Some(bytes) = cursor.pull(wire::MARKER_LEN) else {
                    return Ok(Step::Pending);
                };
                if bytes[..] != wire::CASE_MARKER {
                    return self.poison(LogError::BadPreamble);
                }
                (FrameState::Version, None)
            }
            FrameState::Version => {
                let Some(bytes) = cursor.pull(wire::MARKER_LEN) else {
                    return Ok(Step::Pending);
                };
                if bytes[..] != wire::FORMAT_VERSION {
                    let found = bytes[..].try_into().unwrap();
                    return self.poison(LogError::UnsupportedVersion(found));
                }
                (FrameState::CaseLength, None)
            }
            FrameState::CaseLength => {
                let Some(bytes) = cursor.pull(wire::LENGTH_LEN) else {
                    return Ok(Step::Pending);
                };
                let payload_len = u16::from_be_bytes(bytes[..].try_into().unwrap()) as usize;
                (FrameState::CaseDigest { payload_len }, None)
            }
            FrameState::CaseDigest { payload_len } => {
                let Some(bytes) = cursor.pull(Digest::LEN) else {
                    return Ok(Step::Pending);
                };
                let digest = Digest::from_array(bytes[..].try_into().unwrap());
                self.chain.observe(&digest);
                (FrameState::CasePayload { payload_len, digest }, None)
            }
            FrameState::CasePayload { payload_len, digest } => {
                let Some(payload) = cursor.pull(payload_len) else {
                    return Ok(Step::Pending);
                };
                match record::decode_case(&payload, &digest) {
                    Ok(case) => (FrameState::JobOrPostamble, Some(FrameEvent::Case(case))),
                    Err(err) => return self.poison(err),
                }
            }
            FrameState::JobOrPostamble => {
                let Some(bytes) = cursor.pull(wire::MARKER_LEN) else {
                    return Ok(Step::Pending);
                };
                if bytes[..] == wire::JOB_MARKER {
                    (FrameState::JobLength, None)
                } else if bytes[..] == wire::POSTAMBLE_MARKER {
                    (FrameState::ChainDigest, None)
                } else {
                    let found = bytes[..].try_into().unwrap();
                    return self.poison(LogError::UnexpectedMarker { found });
                }
            }
            FrameState::JobLength => {
                let Some(bytes) = cursor.pull(wire::LENGTH_LEN) else {
                    return Ok(Step::Pending);
                };
                let payload_len = u16::from_be_bytes(bytes[..].try_into().unwrap()) as usize;
                (FrameState::JobDigest { payload_len }, None)
            }
            FrameState::JobDigest { payload_len } => {
                let Some(bytes) = cursor.pull(Digest::LEN) else {
                    return Ok(Step::Pending);
                };
                let digest = Digest::from_array(bytes[..].try_into().unwrap());
                self.chain.observe(&digest);
                (FrameState::JobPayload { payload_len, digest }, None)
            }
            FrameState::JobPayload { payload_len, digest } => {
                let Some(payload) = cursor.pull(payload_len) else {
                    return Ok(Step::Pending);
                };
                match record::decode_job(&payload, &digest) {
                    Ok(job) => (FrameState::JobOrPostamble, Some(FrameEvent::Job(job))),
                    Err(err) => return self.poison(err),
                }
            }
            FrameState::ChainDigest => {
                let Some(bytes) = cursor.pull(Digest::LEN) else {
                    return Ok(Step::Pending);
                };
                let stated = Digest::from_array(bytes[..].try_into().unwrap());
                let chain = std::mem::take(&mut self.chain);
                let computed = chain.finish();
                if computed != stated {
                    return self.poison(LogError::ChainDigestMismatch { stated, computed });
                }
                (FrameState::Terminal, Some(FrameEvent::End))
            }
            FrameState::Terminal => return Ok(Step::Pending),
        };

        self.state = next;
        Ok(Step::Advanced(event))
    }

    fn poison(&mut self, err: LogError) -> Result<Step, LogError> {
        self.state = FrameState::Terminal;
        Err(err)
    }
}

impl Default for FrameMachine {
    fn default() -> Self {
        Self::new()
    }
}
