//! ksd - decode Kubernetes secrets straight from kubectl.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Argument parsing and dispatch
//! │   └── output        # Stderr message helpers
//! └── core/             # Decode pipeline
//!     ├── format        # JSON/YAML selection (sniffing and -o flag scan)
//!     ├── input         # Piped stdin handling
//!     ├── kubectl       # Wrapped kubectl invocation
//!     ├── secret        # data map extraction and base64 decoding
//!     ├── document      # Full-document parse, merge, and rendering
//!     └── transform     # Pipeline orchestration
//! ```
//!
//! # Features
//!
//! - Works as a pipe filter (`kubectl get secret s -o yaml | ksd`)
//! - Works as a kubectl wrapper (`ksd get secret s -o json`)
//! - Preserves every field other than the decoded `data` map

pub mod cli;
pub mod core;
pub mod error;
