//! Business 360 specification emitter.
//!
//! Materializes the Business 360 mobile-first screen specification into a
//! CSV feature table and a plain-text layout document.

pub mod catalog;
pub mod emitter;
pub mod error;
pub mod export;
pub mod layout;
pub mod models;
pub mod render;

pub use emitter::{EmitReport, Emitter, LAYOUT_FILE_NAME, TABLE_FILE_NAME};
pub use error::EmitError;
