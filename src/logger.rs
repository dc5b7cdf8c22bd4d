// src/logger.rs
// Session transcript logging with levels and formatted output
//
// INSTALLER IMPACT NOTES:
// - Records prompts, answers, and filesystem outcomes for troubleshooting
// - Writes only to the file named by ZEPHINST_LOG; console output belongs
//   to the console controller, whose lines are fixed
// - Disabled entirely when no log path is given

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::errors::InstallerResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

pub struct InstallLog {
    level: LogLevel,
    log_file: Option<Mutex<std::fs::File>>,
}

impl InstallLog {
    /// Create a new logger appending to `log_path`, or a disabled one for `None`
    pub fn new(level: LogLevel, log_path: Option<PathBuf>) -> InstallerResult<Self> {
        let log_file = match log_path {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(&path)?;
                Some(Mutex::new(file))
            }
            None => None,
        };

        Ok(InstallLog { level, log_file })
    }

    /// Build from the ZEPHINST_LOG environment variable; disabled when unset
    pub fn from_env() -> InstallerResult<Self> {
        let path = std::env::var_os("ZEPHINST_LOG").map(PathBuf::from);
        Self::new(LogLevel::Debug, path)
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    /// Log with specified level
    pub fn log(&self, level: LogLevel, message: &str) {
        if level as u8 >= self.level as u8 {
            if let Some(ref mutex_file) = self.log_file {
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let level_str = match level {
                    LogLevel::Debug => "[DEBUG]",
                    LogLevel::Info => "[INFO]",
                    LogLevel::Warn => "[WARN]",
                    LogLevel::Error => "[ERROR]",
                };

                if let Ok(mut file) = mutex_file.lock() {
                    let _ = writeln!(file, "{} {} {}", timestamp, level_str, message);
                }
            }
        }
    }

    pub fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }
    pub fn info(&self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }
    pub fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, msg);
    }
    pub fn error(&self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }
}

impl Default for InstallLog {
    fn default() -> Self {
        InstallLog {
            level: LogLevel::Info,
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_logger_creation() {
        let logger = InstallLog::new(LogLevel::Info, None);
        assert!(logger.is_ok());
        assert!(!logger.unwrap().is_enabled());
    }

    #[test]
    fn test_logger_default() {
        let logger = InstallLog::default();
        assert_eq!(logger.level, LogLevel::Info);
        assert!(!logger.is_enabled());
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let logger = InstallLog::default();
        logger.info("goes nowhere");
        logger.error("also nowhere");
    }

    #[test]
    fn test_transcript_lines_reach_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");
        let logger = InstallLog::new(LogLevel::Debug, Some(path.clone())).unwrap();
        assert!(logger.is_enabled());

        logger.debug("answer: Y - installing");
        logger.info("marker written");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[DEBUG] answer: Y - installing"));
        assert!(contents.contains("[INFO] marker written"));
    }

    #[test]
    fn test_level_gating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gated.log");
        let logger = InstallLog::new(LogLevel::Warn, Some(path.clone())).unwrap();

        logger.info("below threshold");
        logger.warn("at threshold");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("below threshold"));
        assert!(contents.contains("[WARN] at threshold"));
    }
}
