use crate::error::{Result, StyleError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Display style of one metric diagram.
///
/// Field names serialize in camelCase (`criteriaLabel`, `backgroundColor`, ...).
/// When reading, the dictionary keys of the metrix++ report script
/// (`label`, `background-color`, `border-color`) are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    /// Metric identifier, e.g. `std.code.complexity.cyclomatic`.
    pub criteria: String,
    #[serde(alias = "label")]
    pub criteria_label: String,
    #[serde(alias = "background-color")]
    pub background_color: String,
    #[serde(alias = "border-color")]
    pub border_color: String,
    /// Ordering hint for charts. Neither unique nor contiguous.
    pub index: i32,
}

impl StyleRecord {
    pub fn new(
        criteria: impl Into<String>,
        criteria_label: impl Into<String>,
        background_color: impl Into<String>,
        border_color: impl Into<String>,
        index: i32,
    ) -> Self {
        Self {
            criteria: criteria.into(),
            criteria_label: criteria_label.into(),
            background_color: background_color.into(),
            border_color: border_color.into(),
            index,
        }
    }

    /// Parse this record's criteria into its namespace and metric parts.
    pub fn key(&self) -> Result<CriteriaKey> {
        CriteriaKey::parse(&self.criteria)
    }
}

static CRITERIA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+(\.[A-Za-z0-9_]+)+$").expect("static regex"));

/// Validated metric identifier.
///
/// metrix++ groups metrics by namespace in its aggregated data
/// (`std.code.complexity` -> `cyclomatic`), so the last segment is the metric
/// and everything before it the namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CriteriaKey {
    raw: String,
    split: usize,
}

impl CriteriaKey {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if !CRITERIA_RE.is_match(s) {
            return Err(StyleError::InvalidCriteria(s.to_string()));
        }
        // The regex guarantees at least one dot.
        let split = s.rfind('.').unwrap_or(0);
        Ok(Self {
            raw: s.to_string(),
            split,
        })
    }

    /// Everything before the last dot, e.g. `std.code.complexity`.
    pub fn namespace(&self) -> &str {
        &self.raw[..self.split]
    }

    /// Final segment, e.g. `cyclomatic`.
    pub fn metric(&self) -> &str {
        &self.raw[self.split + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for CriteriaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
