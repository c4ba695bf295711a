use std::path::Path;

use anyhow::{bail, Context};
use mmcgen::check_well_formed;
use serde::Serialize;

use crate::{app::GlobalOptions, output::print_output};

#[derive(Debug, Serialize)]
pub struct ValidationResult {
    pub path: String,
    pub well_formed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Check `text` and describe the outcome for `path`.
pub fn validate_text(path: &Path, text: &str) -> ValidationResult {
    let error_message = check_well_formed(text).err().map(|e| e.to_string());
    ValidationResult {
        path: path.display().to_string(),
        well_formed: error_message.is_none(),
        error_message,
    }
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read XML file: {}", path.display()))?;
    let result = validate_text(path, &text);

    print_output(&result, opts, |r| {
        let status = if r.well_formed { "PASS" } else { "FAIL" };
        println!("{status}  {}", r.path);
        if let Some(err) = &r.error_message {
            println!("  Error: {err}");
        }
    })?;

    if !result.well_formed {
        bail!("{} is not well-formed", path.display());
    }
    Ok(())
}
