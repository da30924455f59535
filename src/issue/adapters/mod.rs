//! Adapter implementations for issue tracking ports.

pub mod memory;
pub mod postgres;

mod log;

pub use log::TracingNotifier;
