//! docsum HTTP service: document upload, text extraction, and extractive
//! summarization.

pub mod api;
pub mod app_config;
pub mod cli;
pub mod pipeline;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
