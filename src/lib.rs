//! # Clubdesk
//!
//! Batch and permission tooling for the student club admin console.
//!
//! The console shows or hides its create/edit/delete controls based on who
//! is signed in, which batch (academic cohort, `"2024-2025"`) they belong to,
//! and which batch is active today. This crate wires the workspace crates
//! into a command-line tool that answers those questions from JSON
//! snapshots of the club API.
//!
//! ## Workspace
//!
//! ```text
//! crates/
//! ├── clubdesk-core/          # Batch label parsing, permission names, serde helpers
//! ├── clubdesk-config/        # Environment configuration
//! ├── clubdesk-models/        # Identity, records, event form
//! ├── clubdesk-access/        # BatchClock, PermissionEvaluator, listings
//! └── clubdesk-observability/ # Console logging
//! src/
//! ├── cli/                    # clap commands
//! ├── report.rs               # Text rendering
//! ├── snapshot.rs             # JSON snapshot loading
//! └── validator.rs            # Event form verdicts
//! ```
//!
//! ## Roles
//!
//! | Role | Batch scope |
//! |------|-------------|
//! | Superadmin | Every batch |
//! | Admin | Own batch, plus one admin account in the next batch |
//!
//! ## Configuration
//!
//! ```bash
//! BATCH_BOUNDARY_MONTH=6
//! BATCH_HISTORY_START_YEAR=2019
//! ADMIN_BATCH_HISTORY_START_YEAR=2024
//! FOUNDER_EMAILS=founder@club.org,cofounder@club.org
//! LOG_LEVEL=info
//! ```

pub mod cli;
pub mod report;
pub mod snapshot;
pub mod validator;

// Re-export workspace crates for convenience
pub use clubdesk_access;
pub use clubdesk_config;
pub use clubdesk_core;
pub use clubdesk_models;
