//! Checks whether a stored bot credential still works, and prints
//! a single `TAG|...` line about it for whoever called us.

mod checker;
mod config;
mod entry;
mod status;

pub use checker::{check, CheckError, Identity, IdentitySource};
pub use config::{CheckerConfig, ConfigError, DEFAULT_CONFIG_PATH, DEFAULT_TIMEOUT};
pub use entry::entry;
pub use status::Status;
