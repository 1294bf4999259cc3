//! Fixed light/dark palettes for the themed form variant.

use egui::{Color32, Visuals};

/// The two palettes the themed form toggles between.
///
/// Each palette pins three colors: the window background, the foreground
/// text, and the field backgrounds. Everything else keeps the stock egui
/// style so widget spacing and behavior stay identical across themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other palette.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle control, naming the palette it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }

    fn background(self) -> Color32 {
        match self {
            Theme::Light => Color32::from_rgb(0xf0, 0xf0, 0xf0),
            Theme::Dark => Color32::from_rgb(0x2b, 0x2b, 0x2b),
        }
    }

    fn foreground(self) -> Color32 {
        match self {
            Theme::Light => Color32::from_rgb(0x1a, 0x1a, 0x1a),
            Theme::Dark => Color32::from_rgb(0xe6, 0xe6, 0xe6),
        }
    }

    fn field_background(self) -> Color32 {
        match self {
            Theme::Light => Color32::WHITE,
            Theme::Dark => Color32::from_rgb(0x3c, 0x3f, 0x41),
        }
    }

    /// Build the egui visuals for this palette.
    pub fn visuals(self) -> Visuals {
        let mut visuals = match self {
            Theme::Light => Visuals::light(),
            Theme::Dark => Visuals::dark(),
        };
        visuals.panel_fill = self.background();
        visuals.window_fill = self.background();
        visuals.extreme_bg_color = self.field_background();
        visuals.override_text_color = Some(self.foreground());
        visuals
    }
}
