// src/install.rs
// The install action: one idempotent directory, one marker file

use std::fs;
use std::io::Write;

use tracing::debug;

use crate::config::InstallerConfig;
use crate::errors::{InstallerError, InstallerResult};
use crate::logger::InstallLog;

/// Performs the filesystem side of an accepted install.
pub struct Installer<'a> {
    config: &'a InstallerConfig,
    log: &'a InstallLog,
}

impl<'a> Installer<'a> {
    pub fn new(config: &'a InstallerConfig, log: &'a InstallLog) -> Self {
        Self { config, log }
    }

    /// Run the install action, reporting progress on `out`.
    ///
    /// Filesystem failures are caught and reported, never propagated: a
    /// failed directory creation still falls through to the marker write,
    /// and a failed marker write is reported the same way. The only error
    /// returned is `out` itself failing.
    pub fn install<W: Write>(&self, out: &mut W) -> InstallerResult<()> {
        match self.ensure_install_dir() {
            Ok(()) => {
                writeln!(
                    out,
                    "Folder '{}' created or already exists.",
                    self.config.install_dir.display()
                )?;
                self.log.info(&format!(
                    "install directory ready: {}",
                    self.config.install_dir.display()
                ));
            }
            Err(e) => {
                writeln!(out, "Error creating folder: {}", e)?;
                self.log.error(&e.to_string());
            }
        }

        match self.write_marker() {
            Ok(()) => {
                self.log.info(&format!(
                    "marker written: {}",
                    self.config.marker_path().display()
                ));
            }
            Err(e) => {
                writeln!(out, "Error writing marker file: {}", e)?;
                self.log.error(&e.to_string());
            }
        }

        Ok(())
    }

    /// Idempotent create-if-absent of the target directory
    fn ensure_install_dir(&self) -> InstallerResult<()> {
        let dir = &self.config.install_dir;
        debug!("ensuring install directory {}", dir.display());

        fs::create_dir_all(dir).map_err(|e| InstallerError::DirectoryCreationFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Create or truncate the marker file and write the fixed content.
    ///
    /// The file handle is scoped to this function and closed on every exit
    /// path. Overwrite semantics: a second install leaves the same bytes.
    fn write_marker(&self) -> InstallerResult<()> {
        let path = self.config.marker_path();
        debug!("writing marker file {}", path.display());

        let to_marker_error = |e: std::io::Error| InstallerError::MarkerWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        let mut file = fs::File::create(&path).map_err(to_marker_error)?;
        file.write_all(self.config.marker_content.as_bytes())
            .map_err(to_marker_error)?;

        Ok(())
    }
}
