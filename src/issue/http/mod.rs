//! HTTP surface for the issue service.
//!
//! [`handlers`] map raw request bodies to [`ApiResponse`] values without
//! depending on a server framework; [`router`] mounts them on `axum`.

pub mod handlers;
mod response;
mod router;

pub use response::{ApiResponse, GENERIC_ERROR_MESSAGE, NOT_FOUND_MESSAGE};
pub use router::router;
