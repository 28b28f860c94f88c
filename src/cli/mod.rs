//! Command-line interface.

pub mod output;

use clap::Parser;
use tracing::debug;

use crate::core::format::Format;
use crate::core::{input, kubectl, transform};
use crate::error::{KsdError, Result};

/// ksd - decode Kubernetes secrets straight from kubectl.
#[derive(Parser)]
#[command(
    name = "ksd",
    about = "Decode the base64 data in Kubernetes secrets",
    version,
    after_help = "Examples:\n  kubectl get secret my-secret -o yaml | ksd\n  ksd get secret my-secret -o json"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// kubectl arguments to forward (e.g. `get secret my-secret -o json`)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Run the decode pipeline in the mode the invocation implies: with kubectl
/// arguments present, wrap kubectl; otherwise read a piped secret from stdin.
pub fn execute(args: Vec<String>) -> Result<()> {
    let (raw, format) = if args.is_empty() {
        let raw = input::read_piped()?;
        let format = Format::detect(&raw);
        debug!(%format, bytes = raw.len(), "sniffed piped input");
        (raw, format)
    } else {
        let format = Format::from_args(&args).ok_or_else(|| {
            KsdError::Usage("set -o json or -o yaml on the kubectl command".to_string())
        })?;
        let raw = kubectl::capture(&args)?;
        (raw, format)
    };

    let rendered = transform::decode_secret(&raw, format)?;
    print!("{}", rendered);
    Ok(())
}
