//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::analysis::AnalysisResult;
use crate::error::Result;

/// Writes the result to a file as pretty-printed JSON.
///
/// Keys are camelCase and every map is ordered, so the same result always
/// produces the same bytes.
pub fn write_json(result: &AnalysisResult, output_path: &str) -> Result<()> {
    let json = to_json(result)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Same as [`write_json`], returned as a string.
pub fn to_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
