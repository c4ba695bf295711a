use std::path::Path;

use anyhow::Context;
use mmcgen::{ManifestConfig, RowRecord, RowValue};

/// Read a CSV sheet into rows. The header row names the columns; empty cells are left out.
pub fn load_rows(path: &Path) -> anyhow::Result<Vec<RowRecord>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .with_context(|| format!("failed to open CSV file: {}", path.display()))?;
    let rows = read_rows(reader)
        .with_context(|| format!("failed to read CSV file: {}", path.display()))?;

    log::debug!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn read_rows<R: std::io::Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<RowRecord>> {
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // Header is line 1
        let record = record.with_context(|| format!("malformed record on line {}", index + 2))?;
        rows.push(
            headers
                .iter()
                .zip(record.iter())
                .filter(|(_, cell)| !cell.is_empty())
                .map(|(column, cell)| (column, RowValue::from(cell)))
                .collect(),
        );
    }
    Ok(rows)
}

/// The lenient or strict preset.
pub fn manifest_config(strict: bool) -> ManifestConfig {
    if strict {
        ManifestConfig::strict()
    } else {
        ManifestConfig::lenient()
    }
}

/// Extract a display-friendly filename from a path.
pub fn file_display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use mmcgen::RowKind;

    fn rows_from(text: &str) -> anyhow::Result<Vec<RowRecord>> {
        read_rows(
            csv::ReaderBuilder::new()
                .trim(csv::Trim::Headers)
                .from_reader(text.as_bytes()),
        )
    }

    #[test]
    fn test_empty_cells_are_absent() {
        let rows = rows_from("Type,Track ID,Language\nVideo,V1,\nAudio,A1,en\n").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind(), Some(RowKind::Video));
        assert!(rows[0].get("Language").is_none());
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].text("Language").as_deref(), Some("en"));
    }

    #[test]
    fn test_headers_are_trimmed() {
        let rows = rows_from("Type , Track ID\nAudio,A1\n").unwrap();
        assert_eq!(rows[0].text("Track ID").as_deref(), Some("A1"));
        assert_eq!(rows[0].kind(), Some(RowKind::Audio));
    }

    #[test]
    fn test_ragged_record_is_rejected() {
        let error = rows_from("Type,Track ID\nAudio,A1,extra\n").unwrap_err();
        assert!(format!("{error:#}").contains("line 2"));
    }

    #[test]
    fn test_sample_sheet() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/samples/title.csv");
        let rows = load_rows(&path).unwrap();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].kind(), Some(RowKind::Root));
        assert_eq!(rows[1].text("Width").as_deref(), Some("1920.0"));
        assert!(rows[4].get("FrameRate").is_none());
    }

    #[test]
    fn test_missing_file() {
        let error = load_rows(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(error.to_string().contains("exist.csv"));
    }

    #[test]
    fn test_manifest_config() {
        assert_eq!(manifest_config(false), ManifestConfig::lenient());
        assert!(manifest_config(true).reject_unknown_rows);
    }
}
