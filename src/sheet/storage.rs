use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::ResultSheet;

/// Load a results sheet from a YAML file
pub fn load_sheet(path: &Path) -> Result<ResultSheet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read results sheet at {}", path.display()))?;

    let sheet: ResultSheet = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse results sheet: invalid YAML in {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        competitors = sheet.competitors.len(),
        "loaded results sheet"
    );
    Ok(sheet)
}
