//! Basic GUI variant: directory picker, language field, extract button,
//! scrollable result pane.

use clap::Parser;
use textgrab::config::{CommonArgs, Config};

#[derive(Parser, Debug)]
#[command(name = "textgrab-gui")]
#[command(about = "Extract text from every image in a directory (GUI)")]
#[command(version)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    textgrab::init_tracing(&args.common.log_level);
    textgrab::gui::run("Image Text Extractor", Config::from(args.common), None)
}
