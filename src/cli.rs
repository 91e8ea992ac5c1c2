use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::models::job::{
    TransferJob, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_SECS, DEFAULT_STALL_TIMEOUT_SECS,
};

/// Retry a resumable rsync transfer until it succeeds or the attempt
/// budget runs out. Partial output is kept between attempts, so each
/// retry picks up where the last one stopped.
#[derive(Debug, Parser)]
#[command(name = "transfer-retry", version)]
pub struct Cli {
    /// Local file or directory to copy.
    pub source: PathBuf,

    /// rsync destination: a local path or [user@]host:path.
    pub destination: String,

    /// Maximum number of rsync invocations before giving up.
    #[arg(
        value_parser = clap::value_parser!(u32).range(1..),
        default_value_t = DEFAULT_MAX_ATTEMPTS,
    )]
    pub max_attempts: u32,

    /// Seconds to wait between failed attempts.
    #[arg(default_value_t = DEFAULT_RETRY_DELAY_SECS)]
    pub retry_delay_seconds: u64,

    /// Abort an attempt when no data moves for this many seconds.
    #[arg(
        long,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..),
        default_value_t = DEFAULT_STALL_TIMEOUT_SECS,
    )]
    pub stall_timeout: u64,

    /// Extra flags passed through to rsync verbatim.
    #[arg(last = true, value_name = "RSYNC_FLAGS")]
    pub rsync_flags: Vec<String>,
}

impl Cli {
    pub fn into_job(self) -> TransferJob {
        TransferJob {
            source: self.source,
            destination: self.destination,
            max_attempts: self.max_attempts,
            retry_delay: Duration::from_secs(self.retry_delay_seconds),
            stall_timeout: Duration::from_secs(self.stall_timeout),
            extra_flags: self.rsync_flags,
        }
    }
}
