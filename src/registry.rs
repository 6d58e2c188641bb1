//! Lookup table from metric criteria to diagram display styles.
//!
//! A registry is assembled with [`StyleRegistryBuilder`] and frozen by
//! [`StyleRegistryBuilder::build`]. The frozen [`StyleRegistry`] has no
//! mutating API, so it can be shared freely between threads.
//!
//! # Example
//!
//! ```rust
//! use mpp_styles::{StyleRecord, StyleRegistry};
//!
//! let registry = StyleRegistry::builtin()
//!     .to_builder()
//!     .set(StyleRecord::new("std.code.lines.code", "code lines", "khaki", "olive", 15))
//!     .build();
//!
//! let cc = registry.get("std.code.complexity.cyclomatic").unwrap();
//! assert_eq!(cc.index, 12);
//! assert!(registry.get("nonexistent.key").is_none());
//! ```

use crate::models::StyleRecord;
use ahash::AHashMap;
use std::sync::OnceLock;

/// Styles shipped with the crate: `(criteria, label, background, border, index)`.
const BUILTIN_STYLES: [(&str, &str, &str, &str, i32); 5] = [
    ("miext.maintainability.MIwoc", "MI w/o comments", "lightblue", "blue", 11),
    ("miext.halstead.H_Volume", "halstead volume", "lightblue", "blue", 6),
    ("std.code.complexity.cyclomatic", "cyclomatic complexity", "lightblue", "blue", 12),
    ("std.code.lines.comments", "lines of comment per file", "lightblue", "blue", 13),
    ("std.code.lines.total", "total lines per file", "lightblue", "blue", 14),
];

/// Records of the built-in table, in declaration order.
pub fn builtin_records() -> Vec<StyleRecord> {
    BUILTIN_STYLES
        .iter()
        .map(|&(criteria, label, bg, border, index)| {
            StyleRecord::new(criteria, label, bg, border, index)
        })
        .collect()
}

/// Construction-time side of the registry.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistryBuilder {
    styles: AHashMap<String, StyleRecord>,
}

impl StyleRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `record` under its own criteria. Last write wins.
    pub fn set(mut self, record: StyleRecord) -> Self {
        self.insert(record);
        self
    }

    /// In-place variant of [`set`](Self::set).
    pub fn insert(&mut self, record: StyleRecord) {
        if let Some(old) = self.styles.insert(record.criteria.clone(), record) {
            log::debug!("style for `{}` overwritten", old.criteria);
        }
    }

    /// Register every record in order; later duplicates replace earlier ones.
    pub fn extend<I: IntoIterator<Item = StyleRecord>>(mut self, records: I) -> Self {
        for r in records {
            self.insert(r);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Freeze into a read-only registry.
    pub fn build(self) -> StyleRegistry {
        StyleRegistry {
            styles: self.styles,
        }
    }
}

/// Read-only mapping from criteria to [`StyleRecord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRegistry {
    styles: AHashMap<String, StyleRecord>,
}

impl StyleRegistry {
    pub fn builder() -> StyleRegistryBuilder {
        StyleRegistryBuilder::new()
    }

    /// A fresh registry holding the built-in styles.
    pub fn builtin() -> Self {
        StyleRegistryBuilder::new().extend(builtin_records()).build()
    }

    /// Style for `criteria`, or `None` if unknown.
    pub fn get(&self, criteria: &str) -> Option<&StyleRecord> {
        self.styles.get(criteria)
    }

    pub fn contains(&self, criteria: &str) -> bool {
        self.styles.contains_key(criteria)
    }

    /// Every registered criteria exactly once, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.styles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleRecord> + '_ {
        self.styles.values()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Records in display order: by `index`, ties broken by criteria.
    pub fn ordered(&self) -> Vec<&StyleRecord> {
        let mut v: Vec<&StyleRecord> = self.styles.values().collect();
        v.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.criteria.cmp(&b.criteria)));
        v
    }

    /// Copy into a builder so overrides can be layered on top.
    pub fn to_builder(&self) -> StyleRegistryBuilder {
        StyleRegistryBuilder {
            styles: self.styles.clone(),
        }
    }
}

/// Process-wide built-in registry, initialized on first access.
pub fn global() -> &'static StyleRegistry {
    static GLOBAL: OnceLock<StyleRegistry> = OnceLock::new();
    GLOBAL.get_or_init(StyleRegistry::builtin)
}
