use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while editing, loading, saving or exporting a drawing
#[derive(Debug, Error)]
pub enum DrawError {
    /// A malformed editor field. Recoverable: report it and let the user retry.
    #[error("Invalid value: {0}")]
    Validation(String),

    /// A line of a drawing file that does not match any known shape
    #[error("Line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported file name {path:?}, expected extension: {expected}")]
    UnsupportedExtension { path: PathBuf, expected: String },

    #[error("Cannot export objects from an empty canvas")]
    EmptyDocument,

    /// The drawing's bounding box is larger than an image can be
    #[error("Drawing of {width}x{height} pixels is too large to export")]
    ImageTooLarge { width: i64, height: i64 },

    /// Index access outside `0..len`. Indicates a caller bug.
    #[error("Valid indices are from 0 to {len} (exclusive), was: {index}")]
    Bounds { index: usize, len: usize },

    /// An operation was called with arguments its contract forbids. Indicates a caller bug.
    #[error("Precondition violated: {0}")]
    Precondition(String),
}

/// Result type for drawing operations
pub type DrawResult<T> = Result<T, DrawError>;

impl DrawError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format { line, message: message.into() }
    }

    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// True for errors the UI should report in a dialog; false for caller bugs
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::Bounds { .. } | Self::Precondition(_))
    }
}
