//! Validating a file selection before upload.

use std::fs;
use std::path::{Path, PathBuf};

use humansize::{format_size, DECIMAL};

use super::filename::{is_allowed, secure_filename};
use super::status::StatusMessage;
use crate::config::UploadConfig;

/// A validated upload, ready to send as a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Endpoint the form is posted to
    pub endpoint: String,
    /// Multipart field carrying the file
    pub field: String,
    pub path: PathBuf,
    /// Sanitized name the file is sent under
    pub file_name: String,
    pub size_bytes: u64,
}

impl UploadRequest {
    /// Human-readable size, e.g. "12.3 MB".
    pub fn size_display(&self) -> String {
        format_size(self.size_bytes, DECIMAL)
    }
}

/// Check a selected file and build the upload request for it.
///
/// Returns the status to show when the selection cannot be uploaded.
pub fn validate_selection(
    selection: Option<&Path>,
    config: &UploadConfig,
) -> Result<UploadRequest, StatusMessage> {
    let path = selection.ok_or_else(StatusMessage::no_file_selected)?;

    let metadata = match fs::metadata(path) {
        Ok(m) if m.is_file() => m,
        _ => {
            return Err(StatusMessage::error(format!(
                "File not found: {}",
                path.display()
            )))
        }
    };

    let original = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !is_allowed(&original, &config.allowed_extensions) {
        return Err(StatusMessage::upload_failed(Some("File type not allowed"), None));
    }

    Ok(UploadRequest {
        endpoint: config.endpoint.clone(),
        field: config.field_name.clone(),
        path: path.to_path_buf(),
        file_name: secure_filename(&original),
        size_bytes: metadata.len(),
    })
}
