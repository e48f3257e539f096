//! Default coin daemon config file locations
//!
//! Each network records three directory templates, one per platform family,
//! plus the config file name. Picking the platform and reading the
//! environment happen here; parsing the file does not.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Config path errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigPathError {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
}

/// Platform family that decides which template applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    Windows,
    MacOs,
    Posix,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Posix
        }
    }
}

/// Directories the templates are joined onto
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathEnv {
    pub home: Option<PathBuf>,
    pub appdata: Option<PathBuf>,
}

impl PathEnv {
    /// Read `HOME` (or `USERPROFILE`) and `APPDATA` from the process environment
    pub fn from_process() -> Self {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from);
        let appdata = std::env::var_os("APPDATA").map(PathBuf::from);
        Self { home, appdata }
    }
}

/// Where a network's node software keeps its config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigPath {
    /// Directory under `%APPDATA%`
    pub windows_dir: &'static str,
    /// Directory under `$HOME` on macOS
    pub macos_dir: &'static str,
    /// Directory under `$HOME` elsewhere
    pub posix_dir: &'static str,
    pub file_name: &'static str,
}

impl ConfigPath {
    /// The common `<Name>` / `.name` layout used by bitcoin and its forks
    pub const fn standard(
        app_name: &'static str,
        macos_dir: &'static str,
        posix_dir: &'static str,
        file_name: &'static str,
    ) -> Self {
        Self {
            windows_dir: app_name,
            macos_dir,
            posix_dir,
            file_name,
        }
    }

    pub fn resolve_for(&self, platform: Platform, env: &PathEnv) -> Result<PathBuf, ConfigPathError> {
        let dir = match platform {
            Platform::Windows => env
                .appdata
                .as_ref()
                .ok_or(ConfigPathError::MissingEnv("APPDATA"))?
                .join(self.windows_dir),
            Platform::MacOs => env
                .home
                .as_ref()
                .ok_or(ConfigPathError::MissingEnv("HOME"))?
                .join(self.macos_dir),
            Platform::Posix => env
                .home
                .as_ref()
                .ok_or(ConfigPathError::MissingEnv("HOME"))?
                .join(self.posix_dir),
        };
        Ok(dir.join(self.file_name))
    }

    /// Resolve for the running platform and process environment
    pub fn resolve(&self) -> Result<PathBuf, ConfigPathError> {
        self.resolve_for(Platform::current(), &PathEnv::from_process())
    }
}
