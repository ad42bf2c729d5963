//! Client side of the upload-and-process flow.
//!
//! The processing endpoint itself is an external collaborator. This module
//! validates what gets sent to it, interprets what comes back, and builds
//! the status line shown to the viewer along the way.

mod filename;
mod request;
mod response;
mod status;

pub use filename::{extension, is_allowed, secure_filename, DEFAULT_ALLOWED_EXTENSIONS};
pub use request::{validate_selection, UploadRequest};
pub use response::{interpret_response, ProcessedVideo, UploadResponse};
pub use status::{StatusKind, StatusMessage};
