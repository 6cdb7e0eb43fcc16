pub mod config;
pub mod error;
pub mod types;

pub use config::parse_portal_toml;
pub use error::{Error, Result};
pub use types::*;
