//! Seascribe Server — HTTP front-end for the maritime narrative pipeline.

pub mod routes;
pub mod state;

pub use state::AppState;
