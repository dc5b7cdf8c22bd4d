// zephinst/src/main.rs

use std::io;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use zephinst::{ConsoleController, InstallLog, InstallerConfig, Platform, SystemTerminal};

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Diagnostics go to stderr; stdout carries only the prompt protocol.
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> zephinst::InstallerResult<()> {
    let config = InstallerConfig::default();
    config.validate()?;

    let log = InstallLog::from_env()?;
    if log.is_enabled() {
        log.info("session start");
        log.debug(&format!("effective configuration:\n{}", config.to_json()?));
    }

    let platform = Platform::detect();
    tracing::debug!(platform = platform.as_str(), "starting prompt session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let terminal = SystemTerminal::new(platform);

    let mut controller =
        ConsoleController::new(config, stdin.lock(), stdout.lock(), terminal, &log);
    let outcome = controller.run()?;

    log.info(&format!("session finished: {:?}", outcome));
    Ok(())
}
