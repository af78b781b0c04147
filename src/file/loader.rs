//! JSON input loading.
//!
//! Documents come from an inline string, a file (optionally gzipped), or
//! stdin. JSON Lines input becomes an array with one element per line, so
//! `*.field` queries work across all lines.

use crate::document::parser::{parse_json, parse_value};
use crate::document::value::Value;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Parses an inline JSON document, as given to `--input`.
pub fn load_json_str(raw: &str) -> Result<Value> {
    parse_json(raw).context("Failed to parse --input as JSON")
}

/// Loads and parses a JSON file from the filesystem.
///
/// Files ending in `.gz` are decompressed first. Files named `*.jsonl` or
/// `*.ndjson` (before any `.gz`) are parsed as JSON Lines.
///
/// # Examples
///
/// ```no_run
/// use jsonexplorer::file::loader::load_json_file;
///
/// let value = load_json_file("data/test.json").unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read or decompressed, or its
/// contents are not valid JSON (or JSON Lines).
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };
    debug!(
        "read {} bytes from {} (gzip: {})",
        content.len(),
        path_ref.display(),
        is_gzipped
    );

    if determine_jsonl_format(path_ref) {
        parse_jsonl_content(&content)
    } else {
        parse_json(&content)
    }
}

/// Parses JSON Lines content. Blank lines are skipped.
pub fn parse_jsonl_content(content: &str) -> Result<Value> {
    let mut lines = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value: serde_json::Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        lines.push(parse_value(&value));
    }

    if lines.is_empty() {
        anyhow::bail!("No valid JSON found in JSONL content");
    }

    Ok(Value::Array(lines))
}

/// Loads and parses JSON from standard input.
///
/// Gzipped input is detected by its magic bytes. Regular JSON is tried
/// first, then JSON Lines.
pub fn load_json_from_stdin() -> Result<Value> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;
    parse_bytes(buffer)
}

fn parse_bytes(buffer: Vec<u8>) -> Result<Value> {
    // gzip magic bytes
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    if let Ok(value) = parse_json(&content) {
        return Ok(value);
    }

    parse_jsonl_content(&content)
        .context("Failed to parse JSON from stdin: input is neither valid JSON nor valid JSONL")
}

/// Checks for a `.jsonl` or `.ndjson` name, ignoring a trailing `.gz`.
fn determine_jsonl_format<P: AsRef<Path>>(path: P) -> bool {
    let path_str = path.as_ref().to_string_lossy();
    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);
    base.ends_with(".jsonl") || base.ends_with(".ndjson")
}

fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped stdin")?;
    Ok(content)
}
