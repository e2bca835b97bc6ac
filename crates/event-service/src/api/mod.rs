// HTTP API routes
//
// Each submodule handles one resource with its own state.

pub mod common;
pub mod events;
pub mod health;
pub mod validation;

pub use common::ErrorResponse;
