pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliArgs, Command};

pub use adapters::{AudioProxy, SheetsClient};
pub use config::AppConfig;
pub use core::service::ApiService;
pub use utils::error::{LookupError, Result};
