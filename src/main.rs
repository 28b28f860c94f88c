//! ksd - decode Kubernetes secrets straight from kubectl.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ksd::cli::output;
use ksd::cli::{execute, Cli};
use ksd::error::KsdError;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support. Logs go to
    // stderr: stdout carries the decoded document.
    let filter = EnvFilter::try_from_env("KSD_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ksd=debug")
        } else {
            EnvFilter::new("ksd=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.args) {
        match &e {
            // A failed kubectl already explained itself; copy its stderr
            // through verbatim.
            KsdError::Kubectl { stderr, .. } => eprint!("{}", stderr),
            _ => output::error(&e.to_string()),
        }

        if let KsdError::Usage(_) = &e {
            output::hint("pipe a secret in, or wrap kubectl: ksd get secret my-secret -o json");
        }
        std::process::exit(1);
    }
}
