use std::collections::HashSet;
use std::path::Path;

use log::warn;

use crate::config::FILE_COLUMN;
use crate::error::{ExportError, Result};
use crate::pattern::NamePattern;
use crate::types::{Manifest, ParamValue, Parameter, RawManifest};

/// Read and validate a sweep manifest (`info.json`).
pub(crate) fn load_manifest(path: &Path) -> Result<Manifest> {
    let data = std::fs::read_to_string(path)
        .map_err(|err| ExportError::invalid_manifest(path, format!("could not read file: {err}")))?;
    parse_manifest(path, &data)
}

pub(crate) fn parse_manifest(path: &Path, data: &str) -> Result<Manifest> {
    let raw: RawManifest = serde_json::from_str(data)
        .map_err(|err| ExportError::invalid_manifest(path, err.to_string()))?;

    let mut parameters = Vec::with_capacity(raw.arguments.len());
    for (name, argument) in raw.arguments {
        if name == FILE_COLUMN {
            return Err(ExportError::invalid_manifest(
                path,
                format!("parameter name `{FILE_COLUMN}` is reserved for the output column"),
            ));
        }
        if argument.values.is_empty() {
            return Err(ExportError::invalid_manifest(
                path,
                format!("parameter `{name}` has no values"),
            ));
        }
        let mut values = Vec::with_capacity(argument.values.len());
        for value in argument.values {
            let Some(scalar) = ParamValue::from_json(value) else {
                return Err(ExportError::invalid_manifest(
                    path,
                    format!("parameter `{name}` has a non-scalar value"),
                ));
            };
            values.push(scalar);
        }
        parameters.push(Parameter { name, values });
    }

    let manifest = Manifest {
        name_pattern: NamePattern::parse(&raw.name_pattern),
        parameters,
    };
    warn_on_pattern_mismatch(&manifest);
    Ok(manifest)
}

fn warn_on_pattern_mismatch(manifest: &Manifest) {
    let placeholders: HashSet<&str> = manifest.name_pattern.placeholders().collect();
    let names: HashSet<&str> = manifest.parameter_names().collect();

    for name in manifest.parameter_names() {
        if !placeholders.contains(name) {
            warn!(
                "parameter `{name}` does not appear in name pattern {:?}",
                manifest.name_pattern.as_str()
            );
        }
    }
    for placeholder in manifest.name_pattern.placeholders() {
        if !names.contains(placeholder) {
            warn!("placeholder `{{{placeholder}}}` does not name any parameter");
        }
    }
}
