//! textgrab: batch text extraction from image files with Tesseract OCR.
//!
//! Three front-ends share this library: a console binary, a minimal GUI
//! form, and the same form with a light/dark theme toggle. All recognition
//! is delegated to the external `tesseract` executable; this crate only
//! enumerates files, decodes images, forwards them to the engine, and
//! renders the returned strings.

pub mod batch;
pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod extract;

#[cfg(feature = "gui")]
pub mod gui;

pub use batch::{process_directory, BatchReport};
pub use config::Config;
pub use engine::OcrEngine;
pub use engines::TesseractEngine;
pub use error::{OcrError, ScanError};

/// Initialize the tracing subscriber shared by all three binaries.
///
/// `RUST_LOG` wins when set; otherwise `fallback` (the `--log-level` flag)
/// drives the filter. Logs go to stderr so console results stay pipeable.
pub fn init_tracing(fallback: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
