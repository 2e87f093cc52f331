//! Puzzle validation framework.
//!
//! - `PuzzleRule` trait for individual checks
//! - `ValidationEngine` for running rules over a dataset in document order
//! - `Finding` / `Severity` for reporting violations
//! - `ValidationConfig` for disabling rules, overriding severities and
//!   strict mode
//!
//! # Example
//!
//! ```
//! use conjugo::dataset::Dataset;
//! use conjugo::lint::{Severity, ValidationEngine};
//!
//! let document = serde_json::json!({"verb": [{"infinitive": "aimer", "puzzles": [{
//!     "verb": "aimer", "tense": "Présent", "person": "je",
//!     "pronoun": "je", "correctStem": "aim", "correctEnding": "e"
//! }]}]});
//!
//! let engine = ValidationEngine::with_defaults();
//! let result = engine.validate(&Dataset::from_value(document));
//!
//! assert_eq!(result.count(Severity::Strong), 1);
//! assert!(result.passed());
//! ```

pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod rule;
pub mod rules;

pub use config::{PuzzleContext, ValidationConfig};
pub use diagnostic::{Finding, FindingContext, Severity};
pub use engine::{RuleInfo, ValidationEngine, ValidationResult};
pub use rule::{BoxedRule, PuzzleRule};

pub use rules::all_rules;
