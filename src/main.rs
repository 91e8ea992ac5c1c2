mod cli;
mod engine;
mod models;
mod report;

use clap::Parser;
use clap::error::ErrorKind;
use console::style;
use tracing_subscriber::EnvFilter;

use crate::{
    engine::{
        rsync::RsyncTool,
        supervisor::{self, RetryAll},
    },
    report::ConsoleReporter,
};

fn main() {
    // Diagnostics go to stderr; stdout is reserved for rsync's progress.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            std::process::exit(0);
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    let job = args.into_job();
    let mut tool = RsyncTool::new();
    let mut reporter = ConsoleReporter;

    let code = match supervisor::run(&job, &mut tool, &RetryAll, &mut reporter) {
        Ok(status) => status.exit_code(),
        Err(err) => {
            eprintln!("{}", style(format!("error: {err}")).for_stderr().red());
            1
        }
    };

    std::process::exit(code);
}
