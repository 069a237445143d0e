use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the exporter.
pub(crate) type Result<T> = std::result::Result<T, ExportError>;

/// Everything that can stop an export run.
///
/// A combination whose image is missing on disk is not an error; the exporter
/// skips it without surfacing anything to the user.
#[derive(Debug, Error)]
pub(crate) enum ExportError {
    #[error("Could not find manifest: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error(
        "Output directory already exists: {}. Please remove it or choose a different directory.",
        path.display()
    )]
    OutputAlreadyExists { path: PathBuf },

    #[error("Invalid manifest {}: {reason}", path.display())]
    InvalidManifest { path: PathBuf, reason: String },

    #[error("Failed to create output directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub(crate) fn invalid_manifest(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidManifest {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Process exit status for this error.
    ///
    /// Pre-flight refusals (nothing was touched) use 2, the same status clap
    /// uses for usage errors. Failures after work has started use 1.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            ExportError::InputNotFound { .. } | ExportError::OutputAlreadyExists { .. } => 2,
            ExportError::InvalidManifest { .. }
            | ExportError::DirectoryCreation { .. }
            | ExportError::Copy { .. }
            | ExportError::Io { .. } => 1,
        }
    }
}
