//! Directory batch processing: scan one directory, run the extractor on
//! every image-named entry, accumulate filename-to-text pairs in encounter
//! order.

use crate::engine::OcrEngine;
use crate::error::{OcrError, ScanError};
use crate::extract;
use indexmap::IndexMap;
use std::path::Path;

/// File suffixes eligible for extraction, matched case-insensitively against
/// the entry name. Nothing else about the entry is inspected, so a directory
/// named `weird.png` is attempted and fails at decode.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".bmp", ".tiff"];

/// True when `filename` ends with one of the supported suffixes.
pub fn is_supported(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Why an attempted file produced no entry in the result mapping.
#[derive(Debug)]
pub enum SkipReason {
    /// The engine ran but the trimmed result was empty.
    NoText,
    /// Extraction failed; the error keeps its class for display.
    Failed(OcrError),
}

/// One attempted file that yielded nothing.
#[derive(Debug)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: SkipReason,
}

/// Everything one batch run produced.
///
/// The mapping holds only files with non-empty recognized text, in the order
/// the directory listing yielded them; the remaining fields carry what each
/// front-end needs for its own reporting.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Filename to recognized text, insertion-ordered.
    pub extracted: IndexMap<String, String>,
    /// Attempted files that produced no mapping entry, in encounter order.
    pub skipped: Vec<SkippedFile>,
    /// Entries whose names did not match the supported extensions. The GUI
    /// variants report these; the console stays silent about them.
    pub ignored: Vec<String>,
    /// Directory-level fault, when the scan could not run to completion.
    pub error: Option<ScanError>,
}

impl BatchReport {
    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.extracted.is_empty()
    }
}

/// Scan `directory` (immediate entries only, no recursion) and extract text
/// from every entry whose name matches the supported extensions.
///
/// Per-file failures never abort the batch. Directory-level failures stop
/// the scan; whatever was accumulated up to that point is returned with the
/// fault attached.
pub fn process_directory(engine: &dyn OcrEngine, directory: &Path, language: &str) -> BatchReport {
    let mut report = BatchReport::default();

    let entries = match std::fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot list {}: {}", directory.display(), e);
            report.error = Some(ScanError::classify(directory, e));
            return report;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Mid-iteration listing fault: keep what we have so far.
                tracing::warn!("Listing of {} failed midway: {}", directory.display(), e);
                report.error = Some(ScanError::classify(directory, e));
                return report;
            }
        };

        let filename = entry.file_name().to_string_lossy().into_owned();
        if !is_supported(&filename) {
            report.ignored.push(filename);
            continue;
        }

        match extract::extract_text(engine, &entry.path(), language) {
            Ok(text) if !text.is_empty() => {
                report.extracted.insert(filename, text);
            }
            Ok(_) => report.skipped.push(SkippedFile {
                filename,
                reason: SkipReason::NoText,
            }),
            Err(e) => report.skipped.push(SkippedFile {
                filename,
                reason: SkipReason::Failed(e),
            }),
        }
    }

    tracing::info!(
        "Processed {}: {} extracted, {} skipped, {} ignored",
        directory.display(),
        report.extracted.len(),
        report.skipped.len(),
        report.ignored.len()
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed string and counts how often it was asked.
    struct CountingEngine {
        text: &'static str,
        calls: AtomicUsize,
    }

    impl CountingEngine {
        fn new(text: &'static str) -> Self {
            Self {
                text,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl OcrEngine for CountingEngine {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn recognize(&self, _image: &DynamicImage, _language: &str) -> Result<String, OcrError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.to_string())
        }
    }

    fn write_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        RgbImage::new(4, 4).save(&path).unwrap();
        path
    }

    #[test]
    fn test_is_supported_covers_the_fixed_set() {
        for name in ["a.png", "b.jpg", "c.jpeg", "d.gif", "e.bmp", "f.tiff"] {
            assert!(is_supported(name), "{} should match", name);
        }
        for name in ["notes.txt", "archive.zip", "noext", "image.webp", "x.png.bak"] {
            assert!(!is_supported(name), "{} should not match", name);
        }
    }

    #[test]
    fn test_is_supported_ignores_case() {
        assert!(is_supported("SHOUTY.PNG"));
        assert!(is_supported("Mixed.JpEg"));
        assert!(is_supported("photo.TIFF"));
    }

    #[test]
    fn test_batch_attempts_only_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "a.png");
        write_image(dir.path(), "b.PNG");
        write_image(dir.path(), "c.jpg");
        std::fs::write(dir.path().join("notes.txt"), "not an image").unwrap();
        std::fs::write(dir.path().join("README"), "also not").unwrap();

        // A subdirectory with a matching file inside: the scan must not
        // recurse, and the subdirectory's own name does not match.
        let sub = dir.path().join("nested");
        std::fs::create_dir(&sub).unwrap();
        write_image(&sub, "inner.png");

        let engine = CountingEngine::new("SOME TEXT");
        let report = process_directory(&engine, dir.path(), "eng");

        assert_eq!(engine.calls(), 3);
        assert_eq!(report.extracted.len(), 3);
        assert!(report.extracted.contains_key("a.png"));
        assert!(report.extracted.contains_key("b.PNG"));
        assert!(report.extracted.contains_key("c.jpg"));
        assert!(!report.extracted.contains_key("inner.png"));

        let mut ignored = report.ignored.clone();
        ignored.sort();
        assert_eq!(ignored, vec!["README", "nested", "notes.txt"]);
        assert!(report.error.is_none());
    }

    #[test]
    fn test_empty_text_never_enters_the_mapping() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "blank.png");
        write_image(dir.path(), "space.jpg");

        // Whitespace-only output trims to nothing and counts as "no text".
        let engine = CountingEngine::new("   \n\t ");
        let report = process_directory(&engine, dir.path(), "eng");

        assert!(report.is_empty());
        assert_eq!(report.skipped.len(), 2);
        assert!(report
            .skipped
            .iter()
            .all(|s| matches!(s.reason, SkipReason::NoText)));
    }

    #[test]
    fn test_missing_directory_is_one_scan_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("never-created");

        let engine = CountingEngine::new("TEXT");
        let report = process_directory(&engine, &gone, "eng");

        assert!(report.is_empty());
        assert!(report.skipped.is_empty());
        assert!(report.ignored.is_empty());
        assert!(matches!(report.error, Some(ScanError::NotFound(_))));
        assert_eq!(engine.calls(), 0);
    }

    #[test]
    fn test_per_file_failure_does_not_abort_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "good.png");
        std::fs::write(dir.path().join("corrupt.png"), b"zzzzzz").unwrap();

        let engine = CountingEngine::new("RESULT");
        let report = process_directory(&engine, dir.path(), "eng");

        assert_eq!(report.extracted.len(), 1);
        assert!(report.extracted.contains_key("good.png"));
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].filename, "corrupt.png");
        assert!(matches!(
            report.skipped[0].reason,
            SkipReason::Failed(OcrError::ImageRead(_))
        ));
        assert!(report.error.is_none());
    }
}
