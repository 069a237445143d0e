use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExportError, Result};
use crate::types::OutputRow;

pub(crate) fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Row-at-a-time writer for `data.csv`.
pub(crate) struct TableWriter<W: Write> {
    out: W,
    columns: usize,
    rows: usize,
}

impl TableWriter<BufWriter<File>> {
    pub(crate) fn create(path: &Path, header: &[&str]) -> Result<Self> {
        let file = File::create(path)
            .map_err(|err| ExportError::io(format!("creating {}", path.display()), err))?;
        Self::new(BufWriter::new(file), header)
    }
}

impl<W: Write> TableWriter<W> {
    pub(crate) fn new(out: W, header: &[&str]) -> Result<Self> {
        let mut writer = Self {
            out,
            columns: header.len(),
            rows: 0,
        };
        writer.write_line(header.iter().copied())?;
        Ok(writer)
    }

    pub(crate) fn append(&mut self, row: &OutputRow<'_>) -> Result<()> {
        let fields = row.fields();
        debug_assert_eq!(fields.len(), self.columns);
        self.write_line(fields.iter().map(String::as_str))?;
        self.rows += 1;
        Ok(())
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    /// Flush buffered rows and hand back the underlying writer.
    pub(crate) fn finish(mut self) -> Result<W> {
        self.out
            .flush()
            .map_err(|err| ExportError::io("flushing data table", err))?;
        Ok(self.out)
    }

    fn write_line<'s>(&mut self, fields: impl Iterator<Item = &'s str>) -> Result<()> {
        let line = fields.map(csv_escape).collect::<Vec<_>>().join(",");
        writeln!(self.out, "{line}").map_err(|err| ExportError::io("writing data table", err))
    }
}
