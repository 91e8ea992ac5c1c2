use std::time::Duration;

use chrono::{DateTime, Local};
use console::style;

/// Structured progress emitted by the supervisor, one event per state change.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferEvent {
    AttemptStarted { attempt: u32, total: u32, at: DateTime<Local> },
    AttemptFailed { attempt: u32, exit_code: i32 },
    RetryScheduled { attempt: u32, delay: Duration },
    Succeeded { attempts: u32 },
    Exhausted { attempts: u32, last_exit_code: i32 },
}

/// Sink for supervisor progress. Implementations decide how attempts and
/// failures reach the user; the retry loop itself never prints.
pub trait Reporter {
    fn event(&mut self, event: TransferEvent);
}

/// Human-facing renderer: one line per attempt, one per failure, one final
/// banner. Everything goes to stderr since stdout belongs to the copy
/// tool's own progress output. Colors drop out automatically off-tty.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn event(&mut self, event: TransferEvent) {
        match event {
            TransferEvent::AttemptStarted { attempt, total, at } => {
                eprintln!(
                    "[{}] attempt {}/{}",
                    at.format("%Y-%m-%d %H:%M:%S"),
                    style(attempt).for_stderr().cyan(),
                    total,
                );
            }
            TransferEvent::AttemptFailed { attempt, exit_code } => {
                eprintln!(
                    "{}",
                    style(format!("attempt {attempt} failed (exit code {exit_code})"))
                        .for_stderr()
                        .yellow(),
                );
            }
            TransferEvent::RetryScheduled { delay, .. } => {
                eprintln!(
                    "{}",
                    style(format!("retrying in {}s", delay.as_secs())).for_stderr().dim(),
                );
            }
            TransferEvent::Succeeded { attempts } => {
                eprintln!(
                    "{}",
                    style(format!("transfer complete after {attempts} attempt(s)"))
                        .for_stderr()
                        .green()
                        .bold(),
                );
            }
            TransferEvent::Exhausted { attempts, last_exit_code } => {
                eprintln!(
                    "{}",
                    style(format!(
                        "transfer failed after {attempts} attempt(s), last exit code {last_exit_code}"
                    ))
                    .for_stderr()
                    .red()
                    .bold(),
                );
            }
        }
    }
}
