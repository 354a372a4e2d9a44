//! # Output Location
//!
//! Resolves where rendered parts are written.
//!
//! Lookup order for the directory: an explicit override, then the
//! `SCAD_DIRECTORY` environment variable, then the working directory.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use config::constants::{RenderConfig, DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV, SCAD_EXTENSION};
use scad_tree::{write_scad, GeometryNode};
use tracing::debug;

use crate::error::PartResult;

/// Directory rendered files are written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    dir: PathBuf,
}

impl OutputDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory named by `SCAD_DIRECTORY`, or `.` when unset or empty.
    pub fn from_env() -> Self {
        Self::from_env_value(env::var_os(OUTPUT_DIR_ENV))
    }

    /// `dir` when given, otherwise [`OutputDir::from_env`].
    pub fn with_override(dir: Option<PathBuf>) -> Self {
        dir.map_or_else(Self::from_env, Self::new)
    }

    fn from_env_value(value: Option<OsString>) -> Self {
        match value {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Full path for `filename`, adding `.scad` when it has no extension.
    pub fn resolve(&self, filename: impl AsRef<Path>) -> PathBuf {
        let mut path = self.dir.join(filename);
        if path.extension().is_none() {
            path.set_extension(SCAD_EXTENSION);
        }
        path
    }

    /// Render `part` into `filename` under this directory.
    ///
    /// The directory must already exist.
    pub fn save(
        &self,
        part: &GeometryNode,
        filename: impl AsRef<Path>,
        config: &RenderConfig,
    ) -> PartResult<PathBuf> {
        let path = self.resolve(filename);
        debug!(path = %path.display(), "saving part");
        write_scad(part, &path, config)?;
        Ok(path)
    }
}

impl Default for OutputDir {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Render `part` to `filename` in the environment-selected directory.
pub fn save_as_scad(part: &GeometryNode, filename: impl AsRef<Path>) -> PartResult<PathBuf> {
    OutputDir::from_env().save(part, filename, &RenderConfig::default())
}
