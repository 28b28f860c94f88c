//! Output format selection.
//!
//! The format is decided once at the top of a run and threaded down to every
//! parse and render step: sniffed from content in pipe mode, or taken from
//! the kubectl output flag in wrapper mode.

use std::fmt;

/// Serialization format of a secret document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Sniff the format from raw content.
    ///
    /// Anything that parses as a generic JSON value is JSON; everything else
    /// falls back to YAML. Malformed input therefore classifies as YAML and
    /// surfaces as a YAML parse error later in the pipeline.
    pub fn detect(raw: &[u8]) -> Self {
        if serde_json::from_slice::<serde_json::Value>(raw).is_ok() {
            Self::Json
        } else {
            Self::Yaml
        }
    }

    /// Pull the format out of a kubectl argument list.
    ///
    /// Recognizes the usual output flag spellings: `-o json`, `-ojson`,
    /// `-o=json`, `--output json`, `--output=yaml`. Returns `None` when no
    /// output flag names a supported format (`-o jsonpath=...` does not
    /// count).
    pub fn from_args(args: &[String]) -> Option<Self> {
        let mut args = args.iter().peekable();

        while let Some(arg) = args.next() {
            let rest = if let Some(rest) = arg.strip_prefix("--output") {
                rest
            } else if let Some(rest) = arg.strip_prefix("-o") {
                rest
            } else {
                continue;
            };

            let name = match rest.strip_prefix('=') {
                Some(value) => value,
                None if rest.is_empty() => match args.peek() {
                    Some(next) => next.as_str(),
                    None => continue,
                },
                None => rest,
            };

            if let Some(format) = Self::from_name(name) {
                return Some(format);
            }
        }

        None
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
