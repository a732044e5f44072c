//! Observability setup for the storefront workspace.
//!
//! The domain crates only emit `tracing` events. This crate owns the
//! subscriber side:
//! - `LoggingConfig` - level and output format, usually read from the store config
//! - `init` - installs the global fmt subscriber
//! - `init_for_tests` - test-writer subscriber that tolerates repeated calls

mod logging;

pub use logging::*;
