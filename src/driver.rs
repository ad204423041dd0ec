use crate::config::{CompressionMode, ConverterConfig};
use crate::error::{ConvertError, Result};
use crate::filter::movetext_lines;
use crate::reader::{read_document, resolve_inputs};
use crate::splitter::split_games;
use crate::types::{BatchReport, GameBlock, GameFailure};
use crate::visitor::convert_movetext;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Games split out of one input file.
#[derive(Debug, Clone)]
pub struct SourceGames {
    pub source: String,
    pub blocks: Vec<GameBlock>,
}

impl SourceGames {
    pub fn from_text(source: impl Into<String>, text: &str) -> Self {
        Self {
            source: source.into(),
            blocks: split_games(movetext_lines(text)),
        }
    }
}

/// Every input of a run, read and split, ready to be converted.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub sources: Vec<SourceGames>,
}

impl Batch {
    /// Reads and splits all inputs named by `input`.
    ///
    /// With a single input any read error is fatal. With several, inputs
    /// that cannot be read are logged and skipped.
    pub fn load(input: &str, compression: CompressionMode) -> Result<Self> {
        let paths = resolve_inputs(input)?;
        let single = paths.len() == 1;
        let mut sources = Vec::with_capacity(paths.len());

        for path in &paths {
            match read_document(path, compression) {
                Ok(text) => {
                    let games = SourceGames::from_text(path.display().to_string(), &text);
                    log::debug!(
                        "Split {} game(s) from '{}'",
                        games.blocks.len(),
                        games.source
                    );
                    sources.push(games);
                }
                Err(err) if single => return Err(err),
                Err(err) => log::warn!("{err}"),
            }
        }

        Ok(Self { sources })
    }

    pub fn from_text(source: impl Into<String>, text: &str) -> Self {
        Self {
            sources: vec![SourceGames::from_text(source, text)],
        }
    }

    pub fn game_count(&self) -> usize {
        self.sources.iter().map(|s| s.blocks.len()).sum()
    }

    /// Converts every game and writes one line per converted game to `out`.
    ///
    /// Failed games are recorded in the report and skipped, unless
    /// `fail_fast` is set, in which case the first failure aborts the run
    /// after flushing what was already written.
    pub fn convert_into<W: Write>(
        &self,
        out: &mut W,
        out_path: &Path,
        fail_fast: bool,
    ) -> Result<BatchReport> {
        let mut report = self.empty_report();
        self.convert_games(out, out_path, fail_fast, &mut report)?;
        Ok(report)
    }

    fn empty_report(&self) -> BatchReport {
        BatchReport {
            games_found: self.game_count(),
            ..BatchReport::default()
        }
    }

    /// On a fail-fast abort the fatal game is already in `report.failures`.
    fn convert_games<W: Write>(
        &self,
        out: &mut W,
        out_path: &Path,
        fail_fast: bool,
        report: &mut BatchReport,
    ) -> Result<()> {
        for source in &self.sources {
            for block in &source.blocks {
                let err = match convert_movetext(&block.movetext) {
                    Ok(line) => {
                        writeln!(out, "{line}").map_err(|e| ConvertError::io(out_path, e))?;
                        report.games_converted += 1;
                        continue;
                    }
                    Err(err) => err,
                };

                if err.is_per_game() {
                    report.failures.push(GameFailure {
                        source: source.source.clone(),
                        game_index: block.index,
                        error: err.to_string(),
                    });
                }

                if fail_fast || !err.is_per_game() {
                    out.flush().map_err(|e| ConvertError::io(out_path, e))?;
                    log::error!(
                        "Game {} of '{}' failed: {err}",
                        block.index,
                        source.source
                    );
                    return Err(err);
                }

                log::warn!(
                    "Skipping game {} of '{}': {err}",
                    block.index,
                    source.source
                );
            }
        }

        out.flush().map_err(|e| ConvertError::io(out_path, e))
    }

    /// Converts into the configured output file (overwritten) and writes the
    /// failure report if one is configured. The report is also written when
    /// a fail-fast run aborts, and then holds the game that stopped it.
    pub fn convert(&self, config: &ConverterConfig) -> Result<BatchReport> {
        let file =
            File::create(&config.output).map_err(|e| ConvertError::io(&config.output, e))?;
        let mut out = BufWriter::new(file);

        let mut report = self.empty_report();
        let converted =
            self.convert_games(&mut out, &config.output, config.fail_fast, &mut report);

        if let Some(path) = &config.failure_report {
            write_failure_report(path, &report.failures)?;
        }
        converted?;

        log::info!(
            "Converted {} of {} game(s) into '{}'",
            report.games_converted,
            report.games_found,
            config.output.display()
        );
        Ok(report)
    }
}

/// Writes one JSON object per failed game.
pub fn write_failure_report(path: &Path, failures: &[GameFailure]) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut out = BufWriter::new(file);

    for failure in failures {
        serde_json::to_writer(&mut out, failure)?;
        out.write_all(b"\n").map_err(|e| ConvertError::io(path, e))?;
    }
    out.flush().map_err(|e| ConvertError::io(path, e))
}

/// Loads, converts and reports in one call, without printing the count.
pub fn run(config: &ConverterConfig) -> Result<BatchReport> {
    Batch::load(&config.input, config.compression)?.convert(config)
}
