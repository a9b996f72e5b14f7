pub mod config;
pub mod error;
pub mod response;

pub use config::Config;
pub use error::*;
pub use response::*;
