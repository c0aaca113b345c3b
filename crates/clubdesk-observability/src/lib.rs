//! Clubdesk Observability
//!
//! Console logging for the Clubdesk tools. Library crates only emit
//! `tracing` events; binaries call [`init_console_logging`] once at startup.
//!
//! # Examples
//!
//! ```no_run
//! use clubdesk_observability::{LogFormat, init_console_logging};
//!
//! init_console_logging(LogFormat::from_env());
//! tracing::info!("ready");
//! ```

pub mod basic_logging;

pub use basic_logging::{LogFormat, filter_directive, init_console_logging};
