//! Delivery of rendered documents.
//!
//! The renderer stays free of filesystem and browser concerns; hosts hand
//! it a `DocumentSink` and receive the filename that was used.

use std::path::PathBuf;

use chrono::NaiveDate;
use log::info;

use crate::content::suggested_filename;
use crate::document_model::ProposalData;
use crate::errors::RenderError;
use crate::renderer::render;

/// Capability to offer a rendered document to the user.
pub trait DocumentSink: Send + Sync {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> Result<(), RenderError>;
}

/// Writes documents into a directory.
pub struct FileSystemSink {
    directory: PathBuf,
}

impl FileSystemSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl DocumentSink for FileSystemSink {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> Result<(), RenderError> {
        let path = self.directory.join(filename);
        std::fs::write(&path, bytes).map_err(|e| RenderError::Sink(e.to_string()))?;
        info!("Wrote proposal document to {}", path.display());
        Ok(())
    }
}

/// Renders the proposal and delivers it under the contractual filename,
/// which is returned. Safe to re-invoke on retry: there is no partial
/// state, and a repeated delivery simply overwrites the same file.
pub fn render_to_sink(
    data: &ProposalData,
    sink: &dyn DocumentSink,
    today: NaiveDate,
) -> Result<String, RenderError> {
    let bytes = render(data)?;
    let filename = suggested_filename(&data.client.name, today);
    sink.deliver(&filename, &bytes)?;
    Ok(filename)
}
