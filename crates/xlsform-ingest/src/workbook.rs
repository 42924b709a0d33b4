//! Workbook reading and row normalization.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use tracing::debug;

use xlsform_model::{ChoiceRow, FormDefinition, FormMetadata, SurveyRow};

use crate::error::IngestError;

pub const SHEET_SURVEY: &str = "survey";
pub const SHEET_CHOICES: &str = "choices";
pub const SHEET_SETTINGS: &str = "settings";

const SURVEY_COLUMN_TYPE: &[&str] = &["type"];
const SURVEY_COLUMN_NAME: &[&str] = &["name"];
const SURVEY_COLUMN_LABEL: &[&str] = &["label"];
const SURVEY_COLUMN_HINT: &[&str] = &["hint"];
const SURVEY_COLUMN_RELEVANT: &[&str] = &["relevant", "relevance"];
const SURVEY_COLUMN_CONSTRAINT: &[&str] = &["constraint"];
const SURVEY_COLUMN_REQUIRED: &[&str] = &["required"];

const CHOICES_COLUMN_LIST: &[&str] = &["list_name", "list name"];
const CHOICES_COLUMN_LABEL: &[&str] = &["label"];

const SETTINGS_COLUMN_TITLE: &[&str] = &["form_title", "title"];
const SETTINGS_COLUMN_ID: &[&str] = &["form_id", "id_string"];
const SETTINGS_COLUMN_VERSION: &[&str] = &["version"];

/// Load and normalize the three form sheets from a workbook.
///
/// Sheet names are matched case-insensitively. The only errors are an
/// unreadable workbook and a missing required sheet; empty sheets and
/// absent columns yield empty records.
pub fn load_form(path: &Path) -> Result<FormDefinition, IngestError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::OpenWorkbook {
        path: path.to_path_buf(),
        source,
    })?;
    let sheet_names = workbook.sheet_names().to_owned();

    let survey = survey_rows(&sheet_table(&read_sheet(
        &mut workbook,
        &sheet_names,
        SHEET_SURVEY,
    )?));
    let choices = choice_rows(&sheet_table(&read_sheet(
        &mut workbook,
        &sheet_names,
        SHEET_CHOICES,
    )?));
    let settings = settings_metadata(&sheet_table(&read_sheet(
        &mut workbook,
        &sheet_names,
        SHEET_SETTINGS,
    )?));

    debug!(
        survey_rows = survey.len(),
        choice_rows = choices.len(),
        form_id = %settings.form_id,
        "loaded workbook"
    );
    Ok(FormDefinition {
        survey,
        choices,
        settings,
    })
}

fn read_sheet(
    workbook: &mut Sheets<BufReader<File>>,
    sheet_names: &[String],
    wanted: &'static str,
) -> Result<Range<Data>, IngestError> {
    let name = sheet_names
        .iter()
        .find(|name| name.eq_ignore_ascii_case(wanted))
        .ok_or(IngestError::MissingSheet(wanted))?;
    workbook
        .worksheet_range(name)
        .map_err(|source| IngestError::ReadSheet {
            name: name.clone(),
            source,
        })
}

/// A sheet reduced to an uppercase header index plus normalized data rows.
#[derive(Debug, Default)]
struct SheetTable {
    header_map: BTreeMap<String, usize>,
    rows: Vec<Vec<String>>,
}

fn sheet_table(range: &Range<Data>) -> SheetTable {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return SheetTable::default();
    };
    let header_map = build_header_map(header_row);
    let data_rows = rows
        .map(|record| record.iter().map(cell_text).collect::<Vec<String>>())
        .filter(|row| !row.iter().all(String::is_empty))
        .collect();
    SheetTable {
        header_map,
        rows: data_rows,
    }
}

fn build_header_map(cells: &[Data]) -> BTreeMap<String, usize> {
    let mut map = BTreeMap::new();
    for (idx, cell) in cells.iter().enumerate() {
        let header = cell_text(cell);
        if !header.is_empty() {
            map.insert(header.to_uppercase(), idx);
        }
    }
    map
}

fn find_column_index(map: &BTreeMap<String, usize>, candidates: &[&str]) -> Option<usize> {
    for candidate in candidates {
        if let Some(idx) = map.get(&candidate.to_uppercase()) {
            return Some(*idx);
        }
    }
    None
}

/// First column whose header starts with the prefix, for language-tagged
/// headers such as `label::English (en)`.
fn find_prefixed_column(map: &BTreeMap<String, usize>, prefix: &str) -> Option<usize> {
    map.iter()
        .find(|(header, _)| header.starts_with(prefix))
        .map(|(_, idx)| *idx)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.trim().to_string(),
        Data::Float(value) => format_float(*value),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

// Version and name cells often come back as floats; "3.0" must read as "3".
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn field(row: &[String], index: Option<usize>) -> Option<String> {
    let value = row.get(index?)?;
    if value.is_empty() {
        None
    } else {
        Some(value.clone())
    }
}

fn survey_rows(table: &SheetTable) -> Vec<SurveyRow> {
    let type_idx = find_column_index(&table.header_map, SURVEY_COLUMN_TYPE);
    let name_idx = find_column_index(&table.header_map, SURVEY_COLUMN_NAME);
    let label_idx = find_column_index(&table.header_map, SURVEY_COLUMN_LABEL)
        .or_else(|| find_prefixed_column(&table.header_map, "LABEL::"));
    let hint_idx = find_column_index(&table.header_map, SURVEY_COLUMN_HINT)
        .or_else(|| find_prefixed_column(&table.header_map, "HINT::"));
    let relevant_idx = find_column_index(&table.header_map, SURVEY_COLUMN_RELEVANT);
    let constraint_idx = find_column_index(&table.header_map, SURVEY_COLUMN_CONSTRAINT);
    let required_idx = find_column_index(&table.header_map, SURVEY_COLUMN_REQUIRED);

    table
        .rows
        .iter()
        .map(|row| SurveyRow {
            row_type: field(row, type_idx).unwrap_or_default(),
            name: field(row, name_idx),
            label: field(row, label_idx),
            hint: field(row, hint_idx),
            relevant: field(row, relevant_idx),
            constraint: field(row, constraint_idx),
            required: field(row, required_idx),
        })
        .collect()
}

fn choice_rows(table: &SheetTable) -> Vec<ChoiceRow> {
    let list_idx = find_column_index(&table.header_map, CHOICES_COLUMN_LIST);
    let label_idx = find_column_index(&table.header_map, CHOICES_COLUMN_LABEL)
        .or_else(|| find_prefixed_column(&table.header_map, "LABEL::"));

    table
        .rows
        .iter()
        .filter_map(|row| {
            let list_name = field(row, list_idx)?;
            Some(ChoiceRow {
                list_name,
                label: field(row, label_idx).unwrap_or_default(),
            })
        })
        .collect()
}

fn settings_metadata(table: &SheetTable) -> FormMetadata {
    let Some(row) = table.rows.first() else {
        return FormMetadata::default();
    };
    FormMetadata {
        form_title: field(row, find_column_index(&table.header_map, SETTINGS_COLUMN_TITLE))
            .unwrap_or_default(),
        form_id: field(row, find_column_index(&table.header_map, SETTINGS_COLUMN_ID))
            .unwrap_or_default(),
        version: field(row, find_column_index(&table.header_map, SETTINGS_COLUMN_VERSION))
            .unwrap_or_default(),
    }
}
