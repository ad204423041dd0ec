use crate::config::CompressionMode;
use crate::error::{ConvertError, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use zstd::stream::read::Decoder as ZstdDecoder;

pub type PgnInput = Box<dyn Read + Send>;

fn is_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?')
}

/// Expands the configured input into concrete paths.
///
/// A plain path is returned as-is even if it does not exist, so that
/// opening it reports a proper not-found error. Glob matches are sorted.
pub fn resolve_inputs(input: &str) -> Result<Vec<PathBuf>> {
    if !is_pattern(input) {
        return Ok(vec![PathBuf::from(input)]);
    }

    let entries = glob::glob(input).map_err(|e| ConvertError::InvalidPattern {
        pattern: input.to_string(),
        reason: e.to_string(),
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Skipping unreadable glob match: {e}");
                None
            }
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(ConvertError::NoInputFiles(input.to_string()));
    }
    Ok(paths)
}

fn open_error(path: &Path, source: io::Error) -> ConvertError {
    match source.kind() {
        io::ErrorKind::NotFound => ConvertError::FileNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => ConvertError::io(path, source),
    }
}

pub fn open_input_stream(path: &Path, compression: CompressionMode) -> Result<PgnInput> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;

    match compression.for_path(path) {
        CompressionMode::Zstd => ZstdDecoder::new(file)
            .map(|decoder| Box::new(decoder) as PgnInput)
            .map_err(|e| ConvertError::io(path, e)),
        _ => Ok(Box::new(file)),
    }
}

/// Reads a whole input into memory, decoding invalid UTF-8 lossily.
pub fn read_document(path: &Path, compression: CompressionMode) -> Result<String> {
    let mut input = open_input_stream(path, compression)?;
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .map_err(|e| ConvertError::io(path, e))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            log::warn!("'{}' is not valid UTF-8; decoding lossily", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
