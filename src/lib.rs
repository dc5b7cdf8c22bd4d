// src/lib.rs
// Zephyr Installer Utility - core module

pub mod config;
pub mod console;
pub mod errors;
pub mod install;
pub mod logger;
pub mod platform;
pub mod terminal;

// Re-exports
pub use config::InstallerConfig;
pub use console::{ConsoleController, Outcome};
pub use errors::{InstallerError, InstallerResult};
pub use install::Installer;
pub use logger::{InstallLog, LogLevel};
pub use platform::Platform;
pub use terminal::{SystemTerminal, Terminal};
