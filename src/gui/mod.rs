//! eframe front-end: the extraction form, with or without theming.

pub mod app;
pub mod theme;

pub use app::ExtractorApp;
pub use theme::Theme;

use crate::config::Config;
use crate::engines::TesseractEngine;

/// Bootstrap one of the GUI variants.
///
/// Probes for the engine before opening the window. Without it the form
/// is useless, so the fatal console message becomes a blocking dialog and
/// the process exits with status 1, mirroring the console variant.
pub fn run(title: &str, config: Config, theme: Option<Theme>) -> eframe::Result<()> {
    if !TesseractEngine::new(&config).is_available() {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Error")
            .set_description("Tesseract is not installed or not in the system PATH.")
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
        std::process::exit(1);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([640.0, 520.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Ok(Box::new(ExtractorApp::new(cc, config, theme)))),
    )
}
