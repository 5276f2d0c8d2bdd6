/// DotSleuth Core — classification rules, scanning, and data model.
///
/// This crate contains all business logic with zero presentation
/// dependencies. It is designed to be reusable across different frontends
/// (plain-text report today, TUI tomorrow).
///
/// # Modules
///
/// - [`model`] — Candidate entries, size descriptors, and the bucketed inventory.
/// - [`rules`] — Static exclude / safe-to-manage rule sets and the classifier.
/// - [`scanner`] — Single-pass home-directory enumeration and the recursive sizer.
pub mod model;
pub mod rules;
pub mod scanner;
