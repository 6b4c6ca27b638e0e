//! Domain models for the Business 360 specification.
//!
//! - [`FeatureRow`]: one described UI component, exported as a CSV line.
//! - [`COLUMNS`]: the export header, matching the serde field names of [`FeatureRow`].

mod feature_row;

pub use feature_row::*;
