//! OCR engine implementations
//!
//! One engine is real: the external Tesseract executable, driven as a
//! subprocess. Everything upstream talks to the `crate::engine::OcrEngine`
//! trait, which is also the seam tests script against.

pub mod tesseract;

pub use tesseract::TesseractEngine;
