//! Single-image extraction: decode, delegate to the engine, trim.

use crate::engine::OcrEngine;
use crate::error::OcrError;
use std::path::Path;

/// Extract text from one image file.
///
/// The decoded buffer lives only for this call and is released on every exit
/// path, success or failure. Failures keep their class (`ImageRead` /
/// `Engine` / `Unexpected`) so each front-end can word its own message;
/// callers treat any `Err` as "no text for this file" and carry on.
pub fn extract_text(
    engine: &dyn OcrEngine,
    path: &Path,
    language: &str,
) -> Result<String, OcrError> {
    tracing::debug!("Extracting text from {} via {}", path.display(), engine.name());

    let image = image::open(path)?;
    let text = engine.recognize(&image, language)?;

    Ok(text.trim().to_string())
}
