use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Acquires the configuration string the evaluator consumes.
///
/// Acquisition is outside the evaluation core: the parser only ever sees the
/// resulting string. An all-whitespace source loads as an empty string, which
/// the parser then rejects.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read a configuration string from a file, trimming surrounding whitespace.
    pub fn load_from_file(path: &Path) -> Result<String> {
        let raw = std::fs::read_to_string(path).with_context(|| {
            format!("Failed to read promo configuration file: {}", path.display())
        })?;
        Ok(raw.trim().to_string())
    }

    /// Read a configuration string from any reader, trimming surrounding whitespace.
    pub fn load_from_reader<R: Read>(mut reader: R) -> Result<String> {
        let mut raw = String::new();
        reader
            .read_to_string(&mut raw)
            .context("Failed to read promo configuration")?;
        Ok(raw.trim().to_string())
    }
}
