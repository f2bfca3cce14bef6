use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::EditorConfig;
use crate::document::Document;
use crate::element::Shape;
use crate::error::{DrawError, DrawResult};
use crate::format::{self, Serializer};
use crate::renderer;

/// Apply `default` when the path has no extension; reject extensions outside `accepted`.
pub fn resolve_extension(path: &Path, accepted: &[String], default: &str) -> DrawResult<PathBuf> {
    match path.extension() {
        None => Ok(path.with_extension(default)),
        Some(ext) => {
            let ext = ext.to_string_lossy();
            if accepted.iter().any(|candidate| candidate.eq_ignore_ascii_case(&ext)) {
                Ok(path.to_path_buf())
            } else {
                Err(DrawError::UnsupportedExtension {
                    path: path.to_path_buf(),
                    expected: accepted.join(", "),
                })
            }
        }
    }
}

/// Write the document in the text format. Returns the path actually written,
/// which carries the document extension.
pub fn save_document(document: &Document, path: &Path, config: &EditorConfig) -> DrawResult<PathBuf> {
    let accepted = [config.document_extension.clone()];
    let path = resolve_extension(path, &accepted, &config.document_extension)?;

    fs::write(&path, document.serialize())?;
    log::info!("Saved {} shapes to {}", document.len(), path.display());
    Ok(path)
}

/// Replace the document content with the shapes stored in `path`.
///
/// Every line is parsed before the document is touched, so a malformed file
/// leaves the document as it was. Returns the number of loaded shapes.
pub fn load_document(document: &Document, path: &Path, config: &EditorConfig) -> DrawResult<usize> {
    if path.extension().is_some() {
        resolve_extension(path, &[config.document_extension.clone()], &config.document_extension)?;
    }

    let text = fs::read_to_string(path)?;
    let kinds = format::parse_document(&text).inspect_err(|err| {
        log::warn!("Rejected {}: {}", path.display(), err);
    })?;

    let count = kinds.len();
    document.replace_all(kinds.into_iter().map(Shape::new).collect())?;
    log::info!("Loaded {} shapes from {}", count, path.display());
    Ok(count)
}

/// Render the document at its bounding box and encode it by file extension.
/// Returns the path actually written.
pub fn export_document(document: &Document, path: &Path, config: &EditorConfig) -> DrawResult<PathBuf> {
    if document.is_empty() {
        return Err(DrawError::EmptyDocument);
    }

    let path = resolve_extension(path, &config.export_extensions, config.default_export_extension())?;
    let format = path
        .extension()
        .and_then(ImageFormat::from_extension)
        .ok_or_else(|| DrawError::UnsupportedExtension {
            path: path.clone(),
            expected: config.export_extensions.join(", "),
        })?;

    let image = renderer::render_document(document, config)?;
    image.save_with_format(&path, format)?;
    log::info!(
        "Exported {} shapes as {}x{} {:?} to {}",
        document.len(),
        image.width(),
        image.height(),
        format,
        path.display()
    );
    Ok(path)
}

/// Whether the document differs from what was last saved.
///
/// An empty document is never considered edited; a non-empty one that was
/// never saved always is. Otherwise the saved file is re-read and both sides
/// are compared in the text format.
pub fn is_document_edited(document: &Document, saved_path: Option<&Path>) -> DrawResult<bool> {
    if document.is_empty() {
        return Ok(false);
    }
    let Some(saved_path) = saved_path else {
        return Ok(true);
    };

    let saved = format::parse_document(&fs::read_to_string(saved_path)?)?;
    let mut serializer = Serializer::new();
    for kind in &saved {
        kind.accept(&mut serializer);
    }
    Ok(serializer.take_text() != document.serialize())
}
