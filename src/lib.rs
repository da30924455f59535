//! Campus issues: a facility issue tracking backend.
//!
//! Clients report campus facility issues, staff review them and update their
//! status, and the reporter plus an administrator are emailed whenever an
//! issue is created or changes.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure issue records and the status update merge
//! - **Ports**: Abstract trait interfaces for storage and email
//! - **Adapters**: Concrete implementations of ports (memory, `PostgreSQL`, log)
//!
//! # Modules
//!
//! - [`issue`]: Issue intake, status updates, lookups and notifications
//! - [`config`]: Layered deployment configuration

pub mod config;
pub mod issue;
