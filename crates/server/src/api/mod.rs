//! HTTP endpoint modules.
//!
//! Each sub-module owns a single responsibility area.

pub mod doc;
pub mod health;
pub mod summarize;

pub use health::health;
pub use summarize::summarize;
