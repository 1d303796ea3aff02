//! Logging setup for the shopcart workspace.
//!
//! Library crates only emit `tracing` events and spans. Binaries call
//! [`init`] once at startup to decide where those events go:
//!
//! - `LogSettings` - minimum level and output format
//! - `LogFormat` - human-readable lines or one JSON object per event
//! - `init` - installs a global subscriber writing to stderr
//!
//! `RUST_LOG`, when set, overrides the configured level.

mod logging;

pub use logging::*;
