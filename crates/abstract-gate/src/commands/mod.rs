//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use serde::de::DeserializeOwned;

pub mod check;
pub mod info;
pub mod limits;
pub mod list;
pub mod submit;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read a JSON file under the same size limit and deserialize it.
pub fn read_json_file<T: DeserializeOwned>(
    path: &Utf8Path,
    max_bytes: Option<usize>,
) -> anyhow::Result<T> {
    let content = read_input_file(path, max_bytes)?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {path} as JSON"))
}
