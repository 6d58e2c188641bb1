use crate::error::{Result, StyleError};
use crate::models::{CriteriaKey, StyleRecord};
use crate::registry::StyleRegistryBuilder;
use csv::{ReaderBuilder, WriterBuilder};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const FORMULA_STARTS: [char; 4] = ['=', '+', '-', '@'];

/// Prefix text cells that a spreadsheet would evaluate as a formula.
fn sanitize_cell(s: &str) -> String {
    if s.starts_with(FORMULA_STARTS) {
        format!("'{s}")
    } else {
        s.to_string()
    }
}

/// Undo [`sanitize_cell`]: drop one `'` in front of a formula starter.
fn unsanitize_cell(s: String) -> String {
    match s.strip_prefix('\'') {
        Some(rest) if rest.starts_with(FORMULA_STARTS) => rest.to_string(),
        _ => s,
    }
}

/// Value of the metrix++ report script's `--criteria-labels` dictionary,
/// keyed by criteria.
#[derive(Debug, Deserialize)]
struct LabelEntry {
    #[serde(alias = "criteriaLabel")]
    label: String,
    #[serde(rename = "background-color", alias = "backgroundColor")]
    background_color: String,
    #[serde(rename = "border-color", alias = "borderColor")]
    border_color: String,
    index: i32,
}

/// Save style records as CSV with header.
pub fn save_csv<P: AsRef<Path>>(records: &[StyleRecord], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("criteria", "criteriaLabel", "backgroundColor", "borderColor", "index"))?;
    for r in records {
        wtr.serialize((
            sanitize_cell(&r.criteria),
            sanitize_cell(&r.criteria_label),
            sanitize_cell(&r.background_color),
            sanitize_cell(&r.border_color),
            r.index,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save style records as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(records: &[StyleRecord], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(records)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Check every criteria and store it in its normalized form, so a padded
/// key still replaces the record it names.
fn validated(mut records: Vec<StyleRecord>) -> Result<Vec<StyleRecord>> {
    for r in &mut records {
        let key = CriteriaKey::parse(&r.criteria)?;
        if key.as_str() != r.criteria {
            r.criteria = key.as_str().to_string();
        }
    }
    Ok(records)
}

/// Load style records from JSON.
///
/// Accepts either an array of records (as written by [`save_json`]) or an
/// object keyed by criteria whose values carry `label`, `background-color`,
/// `border-color` and `index`.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<StyleRecord>> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    let records = match value {
        Value::Object(_) => {
            let labels: BTreeMap<String, LabelEntry> = serde_json::from_value(value)?;
            labels
                .into_iter()
                .map(|(criteria, e)| {
                    StyleRecord::new(criteria, e.label, e.background_color, e.border_color, e.index)
                })
                .collect()
        }
        other => serde_json::from_value::<Vec<StyleRecord>>(other)?,
    };
    validated(records)
}

/// Load style records from a CSV file with the header written by [`save_csv`].
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<StyleRecord>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let records = rdr
        .deserialize::<StyleRecord>()
        .map(|row| {
            row.map(|r| StyleRecord {
                criteria: unsanitize_cell(r.criteria),
                criteria_label: unsanitize_cell(r.criteria_label),
                background_color: unsanitize_cell(r.background_color),
                border_color: unsanitize_cell(r.border_color),
                index: r.index,
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    validated(records)
}

/// Load a style document, choosing the format by file extension.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<StyleRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(StyleError::MissingStyles(path.to_path_buf()));
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let records = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => return Err(StyleError::UnsupportedFormat(other.to_string())),
    };
    log::debug!("loaded {} style records from {}", records.len(), path.display());
    Ok(records)
}

/// Load a style document into a builder; later rows replace earlier ones.
pub fn read_registry<P: AsRef<Path>>(path: P) -> Result<StyleRegistryBuilder> {
    Ok(StyleRegistryBuilder::new().extend(load_path(path)?))
}
