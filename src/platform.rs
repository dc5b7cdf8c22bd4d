// src/platform.rs
// Platform detection and the native screen-clear command
//
// INSTALLER IMPACT NOTES:
// - The install target path is fixed and never resolved per platform;
//   only the screen clear is OS-specific
// - Windows clears through the cmd builtin, POSIX through clear(1)

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
    Unknown,
}

impl Platform {
    /// Detect current platform
    pub fn detect() -> Self {
        match env::consts::OS {
            "linux" => Platform::Linux,
            "macos" => Platform::MacOS,
            "windows" => Platform::Windows,
            _ => Platform::Unknown,
        }
    }

    /// Program and arguments that clear the terminal on this platform
    ///
    /// `cls` is a cmd builtin, so Windows goes through `cmd /C`.
    pub fn clear_command(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Platform::Windows => ("cmd", &["/C", "cls"]),
            Platform::Linux | Platform::MacOS | Platform::Unknown => ("clear", &[]),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::MacOS => "macOS",
            Platform::Windows => "Windows",
            Platform::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detection() {
        let platform = Platform::detect();
        assert_ne!(platform, Platform::Unknown);
    }

    #[test]
    fn test_clear_command_windows() {
        let (program, args) = Platform::Windows.clear_command();
        assert_eq!(program, "cmd");
        assert_eq!(args, &["/C", "cls"]);
    }

    #[test]
    fn test_clear_command_posix() {
        for platform in [Platform::Linux, Platform::MacOS, Platform::Unknown] {
            let (program, args) = platform.clear_command();
            assert_eq!(program, "clear");
            assert!(args.is_empty());
        }
    }

    #[test]
    fn test_platform_as_str() {
        assert_eq!(Platform::Linux.as_str(), "Linux");
        assert_eq!(Platform::Windows.as_str(), "Windows");
    }
}
