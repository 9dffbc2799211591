//! Logging setup for hosts embedding the dealflow state containers and for
//! the workspace's test harnesses.
//!
//! Built on `tracing-subscriber`; `RUST_LOG` always overrides the configured
//! level.

pub mod logging;
