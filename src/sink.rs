//! Filesystem output sink: one pretty-printed JSON file per document.

use pagesmith_core::{OutputSink, SinkError};
use pagesmith_types::RenderedDocument;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Writes each published document to `<dir>/<name>.json`.
///
/// The directory is created on first persist. This is the only component in
/// the workspace that touches the filesystem.
#[derive(Debug)]
pub struct JsonDirSink {
    dir: PathBuf,
}

impl JsonDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

impl OutputSink for JsonDirSink {
    fn persist(&mut self, name: &str, document: &RenderedDocument) -> Result<(), SinkError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{name}.json"));
        let file = fs::File::create(&path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        log::debug!("[sink] wrote {}", path.display());
        Ok(())
    }
}
