use std::path::PathBuf;

/// Language hint used whenever the caller does not supply one.
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Executable name resolved via the process search path.
pub const DEFAULT_TESSERACT_CMD: &str = "tesseract";

/// Flags shared by all three binaries, flattened into each one's CLI.
#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Recognition language(s) passed to Tesseract, e.g. "eng" or "eng+deu"
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Name or path of the Tesseract executable
    #[arg(long, default_value = DEFAULT_TESSERACT_CMD)]
    pub tesseract_cmd: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

/// Extraction configuration shared by the console and GUI front-ends.
#[derive(Debug, Clone)]
pub struct Config {
    /// Language hint handed to the engine.
    pub language: String,
    /// Name or path of the Tesseract executable.
    pub tesseract_cmd: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            tesseract_cmd: PathBuf::from(DEFAULT_TESSERACT_CMD),
        }
    }
}

impl From<CommonArgs> for Config {
    fn from(args: CommonArgs) -> Self {
        Self {
            language: args.language,
            tesseract_cmd: args.tesseract_cmd,
        }
    }
}
