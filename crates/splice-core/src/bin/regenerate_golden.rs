//! Rewrites `expected_pattern.json` for every fixture under `tests/golden`.
//!
//! Run from the workspace root. Fixtures that do not re-encode to their own
//! bytes (lenient step values, trailing data) are reported so the golden
//! encode tests can skip them.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use splice_core::{decode, encode};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let mut dirs = fs::read_dir(&root)
        .map_err(|err| format!("failed to read {}: {}", root.display(), err))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("failed to read entry: {}", err))?;
    dirs.sort();

    for dir in dirs.iter().filter(|path| path.join("input.splice").is_file()) {
        let canonical = regenerate_one(dir)?;
        let label = if canonical { "canonical" } else { "decode-only" };
        eprintln!("{}: {}", dir.display(), label);
    }
    Ok(())
}

fn regenerate_one(dir: &Path) -> Result<bool, String> {
    let input = dir.join("input.splice");
    let bytes =
        fs::read(&input).map_err(|err| format!("failed to read {}: {}", input.display(), err))?;
    let (json, canonical) = expected_json(&bytes)
        .map_err(|err| format!("fixture {} is unusable: {}", input.display(), err))?;
    let output = dir.join("expected_pattern.json");
    fs::write(&output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(canonical)
}

/// Expected JSON for a fixture and whether the fixture re-encodes to itself.
///
/// The decoded pattern must survive its own round trip, otherwise the JSON
/// would describe something the codec cannot reproduce.
fn expected_json(bytes: &[u8]) -> Result<(String, bool), String> {
    let pattern = decode(bytes).map_err(|err| format!("decoding failed: {}", err))?;
    let encoded = encode(&pattern).map_err(|err| format!("re-encoding failed: {}", err))?;
    let reparsed = decode(&encoded).map_err(|err| format!("re-decoding failed: {}", err))?;
    if reparsed != pattern {
        return Err("pattern changed across a round trip".to_string());
    }

    let mut json = serde_json::to_string_pretty(&pattern)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    json.push('\n');
    Ok((json, encoded == bytes))
}
