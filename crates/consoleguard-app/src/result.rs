use anyhow::Context;
use camino::Utf8Path;
use consoleguard_types::ValidationResult;

/// The result document presented when the template itself could not be decoded.
pub fn decode_error_result(message: &str) -> ValidationResult {
    ValidationResult {
        valid: false,
        checks: Vec::new(),
        summary: format!("Error parsing template: {message}"),
    }
}

pub fn parse_result_json(text: &str) -> anyhow::Result<ValidationResult> {
    serde_json::from_str(text).context("parse result json")
}

pub fn serialize_result(result: &ValidationResult) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(result).context("serialize result")?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write the JSON result to `path`, creating parent directories as needed.
pub fn write_result(path: &Utf8Path, result: &ValidationResult) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create dir {parent}"))?;
    }
    let bytes = serialize_result(result)?;
    std::fs::write(path, bytes).with_context(|| format!("write result {path}"))?;
    Ok(())
}
