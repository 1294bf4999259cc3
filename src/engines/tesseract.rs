//! Tesseract engine implementation
//!
//! Drives the system `tesseract` executable. The decoded image is normalized
//! to RGB8, re-encoded as a temporary PNG, and handed to the CLI with
//! `<program> <tmp.png> stdout -l <language>`; stdout comes back as the
//! recognized text. The executable name is configurable so tests (and users
//! with a local install) can point at something other than the search path.

use crate::config::Config;
use crate::engine::OcrEngine;
use crate::error::OcrError;
use image::DynamicImage;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// OCR engine backed by the external `tesseract` executable.
pub struct TesseractEngine {
    /// Name or path of the executable, resolved via the process search path.
    program: PathBuf,
}

impl TesseractEngine {
    /// Create an engine using the configured executable.
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.tesseract_cmd.clone(),
        }
    }

    /// Create an engine addressed by an explicit program name or path.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Availability probe: run `<program> --version` and discard the output.
    ///
    /// Only a missing executable counts as unavailable; any other outcome,
    /// including a non-zero exit status, means something answered at that
    /// name.
    pub fn is_available(&self) -> bool {
        match Command::new(&self.program).arg("--version").output() {
            Ok(_) => true,
            Err(e) => e.kind() != std::io::ErrorKind::NotFound,
        }
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(&self, image: &DynamicImage, language: &str) -> Result<String, OcrError> {
        // The CLI reads files, not pipes; the handle deletes the file on drop,
        // on the error paths included.
        let input = write_engine_input(image)?;

        tracing::debug!(
            "Running {} on {} (language: {})",
            self.program.display(),
            input.path().display(),
            language
        );

        let output = Command::new(&self.program)
            .arg(input.path())
            .arg("stdout")
            .args(["-l", language])
            .output()
            .map_err(|e| {
                OcrError::Engine(format!("failed to run {}: {}", self.program.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            return Err(OcrError::Engine(if detail.is_empty() {
                output.status.to_string()
            } else {
                format!("{} ({})", detail, output.status)
            }));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| OcrError::Unexpected(format!("engine produced non-UTF-8 output: {}", e)))
    }
}

/// Re-encode the decoded buffer as a PNG temp file the CLI can read.
fn write_engine_input(image: &DynamicImage) -> Result<tempfile::NamedTempFile, OcrError> {
    // RGB8 keeps the encoder away from exotic sample layouts
    let rgb = image.to_rgb8();
    let mut data = Vec::new();
    rgb.write_to(
        &mut std::io::Cursor::new(&mut data),
        image::ImageFormat::Png,
    )
    .map_err(|e| OcrError::Unexpected(format!("failed to encode engine input: {}", e)))?;

    let mut file = tempfile::Builder::new()
        .prefix("textgrab-")
        .suffix(".png")
        .tempfile()
        .map_err(|e| OcrError::Unexpected(format!("failed to create temp file: {}", e)))?;

    file.write_all(&data)
        .map_err(|e| OcrError::Unexpected(format!("failed to write temp file: {}", e)))?;

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn blank_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::new(8, 8))
    }

    #[test]
    fn test_probe_false_for_missing_executable() {
        let engine = TesseractEngine::with_program("textgrab-no-such-binary");
        assert!(!engine.is_available());
    }

    /// Drop a tiny shell script into `dir` and make it executable.
    #[cfg(unix)]
    fn write_stub(dir: &std::path::Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("tesseract-stub");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_true_despite_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path(), "exit 3");
        let engine = TesseractEngine::with_program(&stub);
        assert!(engine.is_available());
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_true_when_spawn_fails_for_other_reasons() {
        // Present but not executable: spawning fails with PermissionDenied,
        // which still counts as "something is there".
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tesseract-stub");
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        let engine = TesseractEngine::with_program(&path);
        assert!(engine.is_available());
    }

    #[cfg(unix)]
    #[test]
    fn test_recognize_captures_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path(), "echo 'HELLO FROM STUB'");
        let engine = TesseractEngine::with_program(&stub);
        let text = engine.recognize(&blank_image(), "eng").unwrap();
        assert_eq!(text.trim(), "HELLO FROM STUB");
    }

    #[cfg(unix)]
    #[test]
    fn test_recognize_reports_engine_failure() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path(), "echo 'boom' >&2; exit 1");
        let engine = TesseractEngine::with_program(&stub);
        let err = engine.recognize(&blank_image(), "eng").unwrap_err();
        match err {
            OcrError::Engine(msg) => assert!(msg.contains("boom"), "unexpected message: {}", msg),
            other => panic!("expected engine error, got {}", other),
        }
    }

    #[test]
    fn test_recognize_spawn_failure_is_engine_class() {
        let engine = TesseractEngine::with_program("textgrab-no-such-binary");
        let err = engine.recognize(&blank_image(), "eng").unwrap_err();
        assert!(matches!(err, OcrError::Engine(_)));
    }
}
