//! The extraction form shared by the basic and themed GUI variants.

use std::path::Path;

use crate::batch::{self, BatchReport, SkipReason};
use crate::config::Config;
use crate::engines::TesseractEngine;
use crate::gui::theme::Theme;

/// One result block, in the same shape the console variant prints.
fn block(filename: &str, text: &str) -> String {
    format!(
        "Filename: {}\nExtracted text:\n{}\n{}\n\n",
        filename,
        text,
        "-".repeat(50)
    )
}

/// Application state for the form.
///
/// The themed variant carries the current palette in `theme`; the basic
/// variant leaves it `None` and keeps the stock egui style.
pub struct ExtractorApp {
    engine: TesseractEngine,
    directory: String,
    language: String,
    output: String,
    theme: Option<Theme>,
}

impl ExtractorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, theme: Option<Theme>) -> Self {
        if let Some(theme) = theme {
            cc.egui_ctx.set_visuals(theme.visuals());
        }
        let engine = TesseractEngine::new(&config);
        Self {
            engine,
            directory: String::new(),
            language: config.language,
            output: String::new(),
            theme,
        }
    }

    fn browse(&mut self) {
        if let Some(directory) = rfd::FileDialog::new().pick_folder() {
            self.directory = directory.display().to_string();
        }
    }

    /// Run the whole batch on the UI thread. The window is unresponsive
    /// until the last image finishes.
    fn extract(&mut self) {
        let directory = self.directory.trim().to_string();
        if directory.is_empty() {
            error_dialog("Please select a directory containing images.");
            return;
        }

        let report =
            batch::process_directory(&self.engine, Path::new(&directory), &self.language);
        self.render_report(&report);
    }

    /// Populate the output pane and surface faults as dialogs.
    ///
    /// Per-file notices come first, in encounter order; a failed file
    /// raises an error dialog and still gets the inline notice, since
    /// failure and "no text" both leave the mapping bare. Then the
    /// directory fault, the non-image summary, the result blocks, and
    /// finally the nothing-extracted notice when the mapping stayed empty.
    fn render_report(&mut self, report: &BatchReport) {
        self.output.clear();

        for skip in &report.skipped {
            if let SkipReason::Failed(err) = &skip.reason {
                error_dialog(&format!("{} ({})", err, skip.filename));
            }
            self.output
                .push_str(&format!("No text extracted from {}\n", skip.filename));
        }

        if let Some(err) = &report.error {
            error_dialog(&err.to_string());
        }

        if !report.ignored.is_empty() {
            info_dialog(
                "Files Skipped",
                &format!(
                    "Skipped {} file(s) without a supported image extension:\n{}",
                    report.ignored.len(),
                    report.ignored.join("\n")
                ),
            );
        }

        for (filename, text) in &report.extracted {
            self.output.push_str(&block(filename, text));
        }

        if report.is_empty() {
            info_dialog(
                "No Text Found",
                "No text was extracted from any images in the selected directory.",
            );
        }
    }
}

impl eframe::App for ExtractorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Directory:");
                ui.add(egui::TextEdit::singleline(&mut self.directory).desired_width(380.0));
                if ui.button("Browse...").clicked() {
                    self.browse();
                }
            });

            ui.horizontal(|ui| {
                ui.label("Language:");
                ui.add(egui::TextEdit::singleline(&mut self.language).desired_width(60.0));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.button("Extract Text").clicked() {
                    self.extract();
                }
                if let Some(theme) = self.theme {
                    if ui.button(theme.toggle_label()).clicked() {
                        let next = theme.toggled();
                        ctx.set_visuals(next.visuals());
                        self.theme = Some(next);
                    }
                }
            });

            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    // Immutable buffer: selectable and copyable, not editable.
                    ui.add(
                        egui::TextEdit::multiline(&mut self.output.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(20)
                            .font(egui::TextStyle::Monospace),
                    );
                });
        });
    }
}

fn error_dialog(message: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn info_dialog(title: &str, message: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
