//! Step definitions, one module per feature area.
//!
//! Every phrase is bound exactly once across the suite; cucumber rejects
//! ambiguous matches, so divergent duplicates cannot exist.

pub mod auth;
pub mod inventory;
