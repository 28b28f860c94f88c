//! Wrapped kubectl invocation.

use std::process::Command;

use tracing::debug;

use crate::error::{KsdError, Result};

/// Run kubectl with the forwarded arguments and capture its stdout.
///
/// A nonzero kubectl exit becomes a [`KsdError::Kubectl`] carrying the
/// captured stderr, which the caller reports verbatim.
pub fn capture(args: &[String]) -> Result<Vec<u8>> {
    debug!(?args, "running kubectl");

    let output = Command::new("kubectl").args(args).output()?;

    if !output.status.success() {
        return Err(KsdError::Kubectl {
            status: output.status.code().unwrap_or(1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(output.stdout)
}
