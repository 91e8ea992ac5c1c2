use std::{io, thread};

use chrono::Local;
use thiserror::Error;

use crate::{
	models::job::{TerminalStatus, TransferJob, FALLBACK_EXIT_CODE},
	report::{Reporter, TransferEvent},
};

#[derive(Debug, Error)]
pub enum SupervisorError {
	#[error("source path does not exist: {0}")]
	SourceMissing(String),
}

/// One attempt of the underlying bulk-copy tool.
///
/// `Ok(Some(code))` is the tool's exit code, `Ok(None)` means it died to a
/// signal. Spawn failures surface as `Err`; the supervisor folds both of
/// the codeless cases into [`FALLBACK_EXIT_CODE`] and retries them like
/// any other nonzero exit.
pub trait CopyTool {
	fn invoke(&mut self, job: &TransferJob) -> io::Result<Option<i32>>;
}

/// Decides whether a failed attempt is worth repeating.
///
/// [`RetryAll`] matches the historical behavior: every nonzero exit is
/// retried, permanent errors included. A custom policy can fail fast on
/// codes it knows will never succeed.
pub trait RetryPolicy {
	fn should_retry(&self, exit_code: i32) -> bool;
}

/// Retry every failure until the attempt budget runs out.
pub struct RetryAll;

impl RetryPolicy for RetryAll {
	fn should_retry(&self, _exit_code: i32) -> bool {
		true
	}
}

/// Drive `job` to a terminal state.
///
/// Invokes the copy tool up to `max_attempts` times, sleeping
/// `retry_delay` between failed attempts and never after the final one.
/// The loop tracks no per-file state: a retried attempt resumes from
/// whatever partial output the tool preserved on disk.
///
/// A missing source fails before the first attempt and before any sleep;
/// it does not count against the attempt budget.
pub fn run(
	job: &TransferJob,
	tool: &mut dyn CopyTool,
	policy: &dyn RetryPolicy,
	reporter: &mut dyn Reporter,
) -> Result<TerminalStatus, SupervisorError> {
	if !job.source.exists() {
		return Err(SupervisorError::SourceMissing(job.source.display().to_string()));
	}

	let mut last_exit_code = FALLBACK_EXIT_CODE;

	for attempt in 1..=job.max_attempts {
		reporter.event(TransferEvent::AttemptStarted {
			attempt,
			total: job.max_attempts,
			at: Local::now(),
		});

		let exit_code = match tool.invoke(job) {
			Ok(Some(code)) => code,
			Ok(None) => FALLBACK_EXIT_CODE,
			Err(err) => {
				tracing::warn!(%err, attempt, "copy tool could not be invoked");
				FALLBACK_EXIT_CODE
			}
		};

		if exit_code == 0 {
			reporter.event(TransferEvent::Succeeded { attempts: attempt });
			return Ok(TerminalStatus::Succeeded { attempts: attempt });
		}

		last_exit_code = exit_code;
		reporter.event(TransferEvent::AttemptFailed { attempt, exit_code });

		if !policy.should_retry(exit_code) {
			let status = TerminalStatus::Exhausted { attempts: attempt, last_exit_code };
			reporter.event(TransferEvent::Exhausted { attempts: attempt, last_exit_code });
			return Ok(status);
		}

		if attempt < job.max_attempts {
			reporter.event(TransferEvent::RetryScheduled { attempt, delay: job.retry_delay });
			thread::sleep(job.retry_delay);
		}
	}

	let status = TerminalStatus::Exhausted { attempts: job.max_attempts, last_exit_code };
	reporter.event(TransferEvent::Exhausted {
		attempts: job.max_attempts,
		last_exit_code,
	});
	Ok(status)
}
