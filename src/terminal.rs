// src/terminal.rs
// Terminal side effects behind a single capability

use std::process::Command;
use std::time::Duration;

use tracing::debug;

use crate::platform::Platform;

/// Screen clearing and the fixed invalid-input pause.
///
/// The console controller treats this as opaque; the mechanism is chosen once
/// at startup. Production uses [`SystemTerminal`], tests substitute a
/// recording double so nothing clears or sleeps for real.
pub trait Terminal {
    /// Clear the terminal screen. Best effort: failures are ignored.
    fn clear_screen(&self);

    /// Block the calling thread for `duration`. Not cancellable.
    fn pause(&self, duration: Duration);
}

/// Terminal backed by the platform's native clear command
pub struct SystemTerminal {
    platform: Platform,
}

impl SystemTerminal {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl Terminal for SystemTerminal {
    fn clear_screen(&self) {
        let (program, args) = self.platform.clear_command();
        if let Err(e) = Command::new(program).args(args).status() {
            debug!("screen clear via {} failed: {}", program, e);
        }
    }

    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_terminal_for_each_platform() {
        for platform in [
            Platform::Linux,
            Platform::MacOS,
            Platform::Windows,
            Platform::Unknown,
        ] {
            let _ = SystemTerminal::new(platform);
        }
    }

    #[test]
    fn test_pause_zero_returns() {
        let terminal = SystemTerminal::new(Platform::detect());
        terminal.pause(Duration::ZERO);
    }
}
