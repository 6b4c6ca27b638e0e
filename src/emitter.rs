//! The specification emitter: build both artifacts, write them, report.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::catalog::build_feature_table;
use crate::error::{EmitError, Result};
use crate::export::{stage_table, stage_text};
use crate::layout::build_layout_document;
use crate::render::render_table;

/// File name of the tabular export.
pub const TABLE_FILE_NAME: &str = "business_360_feature_specification.csv";
/// File name of the layout document.
pub const LAYOUT_FILE_NAME: &str = "business_360_mobile_layout_spec.txt";

const TITLE: &str = "Business 360 Mobile-First Specification Created";
const RULE_WIDTH: usize = 100;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    pub table_path: PathBuf,
    pub layout_path: PathBuf,
    pub rows: usize,
}

/// Writes the feature table and layout document into one directory.
#[derive(Debug, Clone)]
pub struct Emitter {
    out_dir: PathBuf,
}

impl Emitter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn csv_path(&self) -> PathBuf {
        self.out_dir.join(TABLE_FILE_NAME)
    }

    pub fn text_path(&self) -> PathBuf {
        self.out_dir.join(LAYOUT_FILE_NAME)
    }

    /// Run the emitter and print the summary to stdout.
    pub fn run(&self) -> Result<EmitReport> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run the emitter, printing the summary to `out`.
    ///
    /// Both files are fully staged before either target is touched. The
    /// summary is only printed once both are in place.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<EmitReport> {
        let rows = build_feature_table();
        let document = build_layout_document();

        let table = stage_table(&rows, &self.csv_path())?;
        let layout = stage_text(document, &self.text_path())?;

        let table_path = table.commit()?;
        let layout_path = layout.commit()?;

        write_summary(out, &render_table(&rows))
            .map_err(|e| EmitError::file_write("<stdout>", e))?;

        Ok(EmitReport {
            table_path,
            layout_path,
            rows: rows.len(),
        })
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(".")
    }
}

fn write_summary<W: Write>(out: &mut W, table: &str) -> io::Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "\nFeature Specification Table:")?;
    write!(out, "{}", table)?;
    writeln!(out, "\n\n✓ Files created:")?;
    writeln!(out, "  - {}", TABLE_FILE_NAME)?;
    writeln!(out, "  - {}", LAYOUT_FILE_NAME)?;
    out.flush()
}
