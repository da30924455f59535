//! Campus facility issue tracking.
//!
//! Members of the campus report facility problems; staff move them through
//! statuses, optionally assigning them and commenting. The reporter and the
//! administrator are emailed on each change, on a best-effort basis. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Request handlers and routes in [`http`]

pub mod adapters;
pub mod domain;
pub mod http;
pub mod ports;
pub mod services;
