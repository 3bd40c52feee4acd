//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod general;
pub mod health;
pub mod state;
pub mod topics;

pub use error::{ApiError, ApiResult, json_config};
