//! Piped stdin handling.

use std::io::Read;

use crate::error::{KsdError, Result};

/// Read the whole piped secret into memory.
///
/// Parsing needs the complete document, so there is nothing to gain from
/// streaming. Refuses to run when stdin is an interactive terminal or the
/// pipe delivered no bytes.
pub fn read_piped() -> Result<Vec<u8>> {
    if atty::is(atty::Stream::Stdin) {
        return Err(KsdError::Usage(
            "no input: stdin is a terminal".to_string(),
        ));
    }

    let mut raw = Vec::new();
    std::io::stdin().read_to_end(&mut raw)?;

    if raw.is_empty() {
        return Err(KsdError::Usage("no input: stdin was empty".to_string()));
    }

    Ok(raw)
}
