use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Suffix every exported database directory carries.
pub(crate) const DATABASE_EXTENSION: &str = "cdb";
/// Index written inside the database directory.
pub(crate) const DATA_CSV_NAME: &str = "data.csv";
/// Extra column holding the copied image's new name.
pub(crate) const FILE_COLUMN: &str = "FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportConfig {
    pub(crate) manifest_path: PathBuf,
    /// Directory the name pattern is resolved against.
    pub(crate) input_dir: PathBuf,
    pub(crate) output_dir: PathBuf,
}

impl ExportConfig {
    pub(crate) fn from_cli(cli: &Cli) -> Self {
        Self {
            manifest_path: cli.manifest.clone(),
            input_dir: input_dir_for(&cli.manifest),
            output_dir: normalize_output_dir(&cli.output),
        }
    }
}

/// Strip trailing separators and make sure the name ends in `.cdb`.
///
/// Works on path components so non-UTF-8 names survive unchanged.
pub(crate) fn normalize_output_dir(path: &Path) -> PathBuf {
    let mut out: PathBuf = path.components().collect();
    if out.extension() != Some(OsStr::new(DATABASE_EXTENSION)) {
        let mut name = out.into_os_string();
        name.push(".");
        name.push(DATABASE_EXTENSION);
        out = PathBuf::from(name);
    }
    out
}

/// The manifest's directory, or `.` when it was given as a bare file name.
pub(crate) fn input_dir_for(manifest: &Path) -> PathBuf {
    match manifest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
