use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_INPUT: &str = "games.pgn";
pub const DEFAULT_OUTPUT: &str = "uci_games.txt";

const ZSTD_EXTENSION: &str = "zst";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CompressionMode {
    /// Zstd when the file name ends in `.zst`, plain otherwise.
    #[default]
    Auto,
    Plain,
    Zstd,
}

impl CompressionMode {
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim();

        if normalized.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else if normalized.eq_ignore_ascii_case("plain") {
            Ok(Self::Plain)
        } else if normalized.eq_ignore_ascii_case("zstd") {
            Ok(Self::Zstd)
        } else {
            Err(ConvertError::InvalidCompression(normalized.to_string()))
        }
    }

    /// Resolves `Auto` against a concrete path.
    pub fn for_path(self, path: &Path) -> Self {
        match self {
            Self::Auto => {
                let is_zstd = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(ZSTD_EXTENSION));
                if is_zstd { Self::Zstd } else { Self::Plain }
            }
            other => other,
        }
    }
}

impl FromStr for CompressionMode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Everything the batch driver needs to know about one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Input path or glob pattern (`*`, `?`).
    pub input: String,
    pub output: PathBuf,
    pub compression: CompressionMode,
    /// Abort the run on the first game that fails to convert.
    pub fail_fast: bool,
    /// Where to write one JSON object per failed game.
    pub failure_report: Option<PathBuf>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            compression: CompressionMode::Auto,
            fail_fast: false,
            failure_report: None,
        }
    }
}

impl ConverterConfig {
    pub fn new(input: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }
}
