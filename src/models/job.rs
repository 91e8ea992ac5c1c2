use std::{path::PathBuf, time::Duration};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 10;
pub const DEFAULT_STALL_TIMEOUT_SECS: u64 = 60;

/// Exit code used when the copy tool left no code of its own
/// (killed by a signal, or could not be spawned at all).
pub const FALLBACK_EXIT_CODE: i32 = 255;

/// A concrete unit of work: one source, one destination, one attempt budget.
///
/// Built once at startup and immutable for the life of the run. The
/// destination is opaque (a local path or `[user@]host:path`) and is
/// handed through to the copy tool untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferJob {
    pub source: PathBuf,
    pub destination: String,
    pub max_attempts: u32,
    pub retry_delay: Duration,
    /// Per-attempt inactivity bound, forwarded to the copy tool. Bounds
    /// time with no data moving, not total attempt duration.
    pub stall_timeout: Duration,
    /// Extra copy-tool options, appended verbatim.
    pub extra_flags: Vec<String>,
}

/// The two ways a job can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStatus {
    Succeeded { attempts: u32 },
    Exhausted { attempts: u32, last_exit_code: i32 },
}

impl TerminalStatus {
    /// Process exit code for this outcome: 0 on success, the last
    /// observed copy-tool code on exhaustion.
    pub fn exit_code(&self) -> i32 {
        match self {
            TerminalStatus::Succeeded { .. } => 0,
            TerminalStatus::Exhausted { last_exit_code, .. } => *last_exit_code,
        }
    }
}
