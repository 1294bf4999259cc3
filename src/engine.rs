use crate::error::OcrError;
use image::DynamicImage;

/// The recognition capability every OCR backend must provide: hand over a
/// decoded pixel buffer and a language hint, get the recognized text back.
///
/// The extractor owns decoding and trimming; implementations receive the
/// buffer as-is and return the engine's raw output.
pub trait OcrEngine: Send + Sync {
    /// Returns the engine identifier (e.g., "tesseract")
    fn name(&self) -> &'static str;

    /// Recognize text in `image` using the given language hint.
    fn recognize(&self, image: &DynamicImage, language: &str) -> Result<String, OcrError>;
}
