//! mpp_styles
//!
//! Display styles for metrix++ code-quality metric diagrams: a label, fill and
//! border colors, and a chart ordering index per metric criteria.
//! Pairs with the `mpp-styles` CLI.
//!
//! ### Features
//! - Built-in styles for the maintainability, Halstead, complexity and line metrics
//! - O(1) lookup by criteria; unknown criteria yield `None`
//! - Override documents (JSON or CSV) layered over the built-ins, last write wins
//! - Export as CSV or JSON
//!
//! ### Example
//! ```
//! let styles = mpp_styles::global();
//! let cc = styles.get("std.code.complexity.cyclomatic").unwrap();
//! assert_eq!(cc.criteria_label, "cyclomatic complexity");
//! assert_eq!(cc.index, 12);
//!
//! for s in styles.ordered() {
//!     println!("{} {} {}", s.index, s.criteria, s.background_color);
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod storage;

pub use error::StyleError;
pub use models::{CriteriaKey, StyleRecord};
pub use registry::{StyleRegistry, StyleRegistryBuilder, global};
