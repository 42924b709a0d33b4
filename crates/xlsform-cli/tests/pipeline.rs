//! End-to-end tests for the generate/inspect pipeline.

use std::path::PathBuf;

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use xlsform_cli::pipeline::{generate, inspect};
use xlsform_cli::types::FormReport;
use xlsform_ingest::IngestError;

fn add_sheet(workbook: &mut Workbook, name: &str, rows: &[&[&str]]) {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name).expect("set sheet name");
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet
                .write_string(r as u32, c as u16, *value)
                .expect("write cell");
        }
    }
}

fn fixture_workbook(dir: &TempDir) -> PathBuf {
    let mut workbook = Workbook::new();
    add_sheet(
        &mut workbook,
        "survey",
        &[
            &["type", "name", "label", "hint", "relevant", "constraint", "required"],
            &["begin_group", "demo", "Demo", "", "", "", ""],
            &["integer", "age", "Age", "In years", "", "", ""],
            &["text", "name", "Full name", "", "", "", ""],
            &["end_group", "", "", "", "", "", ""],
            &["select_one yn", "consent", "Consent given?", "", "${age} > 17", "", "yes"],
        ],
    );
    add_sheet(
        &mut workbook,
        "choices",
        &[
            &["list_name", "name", "label"],
            &["yn", "1", "Yes"],
            &["yn", "0", "No"],
        ],
    );
    add_sheet(
        &mut workbook,
        "settings",
        &[
            &["form_title", "form_id", "version"],
            &["Household Survey", "hh_survey", "3"],
        ],
    );
    let path = dir.path().join("form.xlsx");
    workbook.save(&path).expect("save workbook");
    path
}

#[test]
fn generate_writes_the_dictionary() {
    let dir = TempDir::new().expect("temp dir");
    let workbook_path = fixture_workbook(&dir);
    let output_path = dir.path().join("out/dictionary.html");

    let result = generate(&workbook_path, &output_path).expect("generate");

    assert_eq!(result.output, output_path);
    assert_eq!(result.report.questions, 3);
    let html = std::fs::read_to_string(&output_path).expect("read output");
    assert!(html.contains("<h1>Household Survey</h1>"));
    assert!(html.contains("Age <span class=\"variable-name\">[age]</span>"));
    // The relevance condition comes out rewritten.
    assert!(html.contains("<strong>Relevant:</strong> Age &gt; 17"));
    assert!(html.contains("<li>Yes</li><li>No</li>"));
    assert!(html.contains("href=\"#group-demo\""));
}

#[test]
fn inspect_counts_questions_per_group() {
    let dir = TempDir::new().expect("temp dir");
    let workbook_path = fixture_workbook(&dir);

    let report = inspect(&workbook_path).expect("inspect");

    assert_eq!(report.form_id, "hh_survey");
    assert_eq!(report.questions, 3);
    assert_eq!(report.required, 1);
    assert_eq!(report.with_choices, 1);
    assert_eq!(report.groups.len(), 2);
    assert_eq!(report.groups[0].title, "Demo");
    assert_eq!(report.groups[0].questions, 2);
    assert_eq!(report.groups[1].title, "(ungrouped)");
    assert_eq!(report.groups[1].required, 1);
}

#[test]
fn report_serializes_for_json_output() {
    let dir = TempDir::new().expect("temp dir");
    let workbook_path = fixture_workbook(&dir);

    let report = inspect(&workbook_path).expect("inspect");
    let json = serde_json::to_string_pretty(&report).expect("serialize report");
    let round: FormReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round.questions, report.questions);
    assert_eq!(round.groups.len(), report.groups.len());

    insta::assert_snapshot!(json, @r#"
    {
      "form_title": "Household Survey",
      "form_id": "hh_survey",
      "version": "3",
      "questions": 3,
      "required": 1,
      "with_choices": 1,
      "groups": [
        {
          "title": "Demo",
          "questions": 2,
          "required": 0,
          "with_choices": 0
        },
        {
          "title": "(ungrouped)",
          "questions": 1,
          "required": 1,
          "with_choices": 1
        }
      ]
    }
    "#);
}

#[test]
fn missing_sheet_surfaces_as_a_typed_ingest_error() {
    let dir = TempDir::new().expect("temp dir");
    let mut workbook = Workbook::new();
    add_sheet(&mut workbook, "survey", &[&["type", "name", "label"]]);
    add_sheet(&mut workbook, "settings", &[&["form_title"]]);
    let path = dir.path().join("partial.xlsx");
    workbook.save(&path).expect("save workbook");

    let error = generate(&path, &dir.path().join("out.html")).expect_err("missing choices");
    let ingest = error
        .downcast_ref::<IngestError>()
        .expect("ingest error in chain");
    assert!(matches!(ingest, IngestError::MissingSheet("choices")));
    // No output file is written on failure.
    assert!(!dir.path().join("out.html").exists());
}

#[test]
fn missing_workbook_reports_the_path() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent.xlsx");
    let error = inspect(&missing).expect_err("missing workbook");
    assert!(format!("{error:#}").contains("absent.xlsx"));
}
