use std::{io, process::Command};

use crate::{engine::supervisor::CopyTool, models::job::TransferJob};

/// Always-on flags: archive semantics, wire compression, and crucially
/// `--partial`, which keeps interrupted output in place so the next
/// attempt with the same argv resumes instead of restarting.
const BASE_FLAGS: &[&str] = &["--archive", "--compress", "--partial", "--progress"];

/// Invokes the system `rsync` binary, one process per attempt.
///
/// stdout/stderr are inherited so rsync's own progress reaches the
/// terminal directly; the supervisor only cares about the exit code.
pub struct RsyncTool {
	program: String,
}

impl RsyncTool {
	pub fn new() -> Self {
		Self { program: "rsync".into() }
	}

	/// Run something other than `rsync` at the same seam. Used by tests.
	pub fn with_program(program: impl Into<String>) -> Self {
		Self { program: program.into() }
	}
}

impl Default for RsyncTool {
	fn default() -> Self {
		Self::new()
	}
}

/// Full argv (minus the program itself) for one attempt. Pure so the
/// flag layout is testable without spawning anything.
pub fn build_args(job: &TransferJob) -> Vec<String> {
	let mut args: Vec<String> = BASE_FLAGS.iter().map(|s| s.to_string()).collect();
	args.push(format!("--timeout={}", job.stall_timeout.as_secs()));
	args.extend(job.extra_flags.iter().cloned());
	args.push(job.source.display().to_string());
	args.push(job.destination.clone());
	args
}

impl CopyTool for RsyncTool {
	fn invoke(&mut self, job: &TransferJob) -> io::Result<Option<i32>> {
		let args = build_args(job);
		tracing::debug!(program = %self.program, ?args, "spawning copy tool");

		let status = Command::new(&self.program).args(&args).status()?;
		Ok(status.code())
	}
}
