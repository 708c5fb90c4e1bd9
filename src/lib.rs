pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::credentials::Credentials;
pub use config::Cli;
pub use core::engine::SisEngine;
pub use utils::error::{Result, SisError};
