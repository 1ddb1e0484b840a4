//! Web layer for the rail data service.
//!
//! Exposes the rail operations as JSON endpoints under `/api/train`.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
