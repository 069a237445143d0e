use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::cli::Cli;
use crate::combinations::enumerate;
use crate::config::{DATA_CSV_NAME, ExportConfig, FILE_COLUMN};
use crate::error::{ExportError, Result};
use crate::manifest::load_manifest;
use crate::table::TableWriter;
use crate::types::{ExportSummary, Manifest, OutputRow};

/// Validate inputs, then export. Nothing is written until the manifest has
/// been found, parsed and validated and the output path is known to be free.
pub(crate) fn run(cli: &Cli) -> Result<ExportSummary> {
    let config = ExportConfig::from_cli(cli);
    info!("Creating new Cinema database at {}", config.output_dir.display());

    if !config.manifest_path.is_file() {
        return Err(ExportError::InputNotFound {
            path: config.manifest_path,
        });
    }
    if config.output_dir.exists() {
        return Err(ExportError::OutputAlreadyExists {
            path: config.output_dir,
        });
    }

    let manifest = load_manifest(&config.manifest_path)?;
    info!(
        "Loaded {} parameters ({} combinations) from {}",
        manifest.parameters.len(),
        manifest.combination_count(),
        config.manifest_path.display()
    );

    export(&manifest, &config.input_dir, &config.output_dir)
}

/// Copy every image the sweep produced into `output_dir` under sequential
/// names and index them in `data.csv`.
///
/// Combinations whose image is missing are skipped and do not consume an id.
/// A failed copy aborts the run and leaves whatever was already written.
pub(crate) fn export(manifest: &Manifest, input_dir: &Path, output_dir: &Path) -> Result<ExportSummary> {
    create_output_dir(output_dir)?;

    let extension = manifest.name_pattern.extension();
    let mut header: Vec<&str> = manifest.parameter_names().collect();
    header.push(FILE_COLUMN);

    let csv_path = output_dir.join(DATA_CSV_NAME);
    let mut table = TableWriter::create(&csv_path, &header)?;

    let mut visited = 0usize;
    let mut next_id = 0usize;
    for combination in enumerate(manifest) {
        visited += 1;
        let relative = manifest.name_pattern.resolve(&combination);
        let source = input_dir.join(&relative);
        if !source.is_file() {
            debug!("skip {}: not found", source.display());
            continue;
        }

        next_id += 1;
        let file = format!("{next_id}{extension}");
        let destination = output_dir.join(&file);
        fs::copy(&source, &destination).map_err(|err| ExportError::Copy {
            from: source.clone(),
            to: destination.clone(),
            source: err,
        })?;
        debug!("{} -> {}", source.display(), destination.display());

        table.append(&OutputRow { combination, file })?;
    }

    let copied = table.rows();
    table.finish()?;

    let summary = ExportSummary {
        output_dir: output_dir.to_path_buf(),
        csv_path,
        visited,
        copied,
        skipped: visited - copied,
    };
    info!(
        "Copied {} of {} combinations into {}",
        summary.copied,
        summary.visited,
        summary.output_dir.display()
    );
    Ok(summary)
}

fn create_output_dir(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            Err(ExportError::OutputAlreadyExists {
                path: path.to_path_buf(),
            })
        }
        Err(err) => Err(ExportError::DirectoryCreation {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}
