use std::fs;

use b360_spec::catalog::build_feature_table;
use b360_spec::export::read_table;
use b360_spec::layout::build_layout_document;
use b360_spec::models::COLUMNS;
use b360_spec::{EmitError, Emitter, LAYOUT_FILE_NAME, TABLE_FILE_NAME};
use speculate2::speculate;
use tempfile::TempDir;

const HEADER: &str = "Screen_Section,Component,Description,Mobile_UX_Treatment,Visual_Design,Interaction_Pattern,Data_Source,Premium_Indicator";

fn run_quietly(emitter: &Emitter) -> Result<String, EmitError> {
    let mut out = Vec::new();
    emitter.run_to(&mut out)?;
    Ok(String::from_utf8(out).expect("summary is not UTF-8"))
}

speculate! {
    before {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let emitter = Emitter::new(dir.path());
    }

    describe "run" {
        it "writes exactly two files into an empty directory" {
            run_quietly(&emitter).expect("Run failed");

            let mut names: Vec<String> = fs::read_dir(dir.path())
                .expect("Failed to list dir")
                .map(|entry| entry.expect("Bad entry").file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();

            assert_eq!(names, vec![TABLE_FILE_NAME.to_string(), LAYOUT_FILE_NAME.to_string()]);
        }

        it "reports the written paths and row count" {
            let mut out = Vec::new();
            let report = emitter.run_to(&mut out).expect("Run failed");

            assert_eq!(report.table_path, emitter.csv_path());
            assert_eq!(report.layout_path, emitter.text_path());
            assert_eq!(report.rows, 17);
        }

        it "starts the table with the header line" {
            run_quietly(&emitter).expect("Run failed");

            let csv = fs::read_to_string(emitter.csv_path()).expect("Failed to read csv");
            assert_eq!(csv.lines().next(), Some(HEADER));
            assert_eq!(HEADER, COLUMNS.join(","));
        }

        it "writes the layout document byte for byte" {
            run_quietly(&emitter).expect("Run failed");

            let text = fs::read(emitter.text_path()).expect("Failed to read layout");
            assert_eq!(text.len(), build_layout_document().len());
            assert_eq!(text, build_layout_document().as_bytes());
        }

        it "is idempotent across runs" {
            run_quietly(&emitter).expect("First run failed");
            let first_csv = fs::read(emitter.csv_path()).expect("Failed to read csv");
            let first_text = fs::read(emitter.text_path()).expect("Failed to read layout");

            run_quietly(&emitter).expect("Second run failed");

            assert_eq!(fs::read(emitter.csv_path()).expect("Failed to read csv"), first_csv);
            assert_eq!(fs::read(emitter.text_path()).expect("Failed to read layout"), first_text);
        }

        it "replaces stale files" {
            fs::write(emitter.csv_path(), "stale").expect("Failed to seed csv");
            fs::write(emitter.text_path(), "stale").expect("Failed to seed layout");

            run_quietly(&emitter).expect("Run failed");

            let csv = fs::read_to_string(emitter.csv_path()).expect("Failed to read csv");
            assert!(csv.starts_with(HEADER));
            assert_eq!(
                fs::read_to_string(emitter.text_path()).expect("Failed to read layout"),
                build_layout_document()
            );
        }

        it "prints the table and the created files" {
            let summary = run_quietly(&emitter).expect("Run failed");

            assert!(summary.starts_with("Business 360 Mobile-First Specification Created\n"));
            assert!(summary.contains(&"=".repeat(100)));
            assert!(summary.contains("Feature Specification Table:"));
            assert!(summary.contains("Sidebar Menu Item"));
            assert!(summary.contains("Advanced Analytics Card"));
            assert!(summary.ends_with(
                "✓ Files created:\n  - business_360_feature_specification.csv\n  - business_360_mobile_layout_spec.txt\n"
            ));
        }
    }

    describe "the exported table" {
        before {
            run_quietly(&emitter).expect("Run failed");
        }

        it "has one header and seventeen data rows" {
            let mut reader = csv::Reader::from_path(emitter.csv_path()).expect("Failed to open csv");
            let header = reader.headers().expect("Missing header").clone();
            let records: Vec<csv::StringRecord> = reader
                .records()
                .collect::<Result<_, _>>()
                .expect("Bad record");

            assert_eq!(header.len(), 8);
            assert_eq!(records.len(), 17);
        }

        it "has eight non-empty fields on every row" {
            let mut reader = csv::Reader::from_path(emitter.csv_path()).expect("Failed to open csv");
            for record in reader.records() {
                let record = record.expect("Bad record");
                assert_eq!(record.len(), 8);
                assert!(record.iter().all(|field| !field.is_empty()));
            }
        }

        it "reads back to the in-memory table" {
            let rows = read_table(&emitter.csv_path()).expect("Failed to read table");
            assert_eq!(rows, build_feature_table());
        }

        it "quotes fields that contain the delimiter" {
            let csv = fs::read_to_string(emitter.csv_path()).expect("Failed to read csv");
            let sidebar = csv.lines().nth(1).expect("Missing first row");
            assert!(sidebar.starts_with(
                "Navigation (Sidebar),Sidebar Menu Item,\"\"\"Business 360\"\" tab in left sidebar navigation\","
            ));
        }
    }

    describe "an unwritable target" {
        it "fails without leaving any file behind" {
            let missing = dir.path().join("does-not-exist");
            let emitter = Emitter::new(&missing);

            let err = run_quietly(&emitter).expect_err("Run should fail");

            assert!(matches!(err, EmitError::FileWrite { .. }));
            assert!(!emitter.csv_path().exists());
            assert!(!emitter.text_path().exists());
            assert_eq!(fs::read_dir(dir.path()).expect("Failed to list dir").count(), 0);
        }

        it "prints no summary" {
            let emitter = Emitter::new(dir.path().join("does-not-exist"));
            let mut out = Vec::new();

            assert!(emitter.run_to(&mut out).is_err());
            assert!(out.is_empty());
        }
    }
}
