//! Themed GUI variant: the same form plus a light/dark toggle.

use clap::Parser;
use textgrab::config::{CommonArgs, Config};
use textgrab::gui::Theme;

#[derive(Parser, Debug)]
#[command(name = "textgrab-gui-themed")]
#[command(about = "Extract text from every image in a directory (themed GUI)")]
#[command(version)]
struct Args {
    /// Palette to start in
    #[arg(long, value_enum, default_value = "light")]
    theme: ThemeArg,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    textgrab::init_tracing(&args.common.log_level);
    textgrab::gui::run(
        "Image Text Extractor",
        Config::from(args.common),
        Some(args.theme.into()),
    )
}
