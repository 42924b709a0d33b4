//! Whole-workbook records.

use serde::{Deserialize, Serialize};

use crate::survey::{ChoiceRow, SurveyRow};

/// Form-level metadata from the first data row of the `settings` sheet.
///
/// Fields default to empty strings when the sheet has no data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMetadata {
    pub form_title: String,
    pub form_id: String,
    pub version: String,
}

/// The three sheets of a loaded workbook, normalized into row records.
#[derive(Debug, Clone, Default)]
pub struct FormDefinition {
    pub survey: Vec<SurveyRow>,
    pub choices: Vec<ChoiceRow>,
    pub settings: FormMetadata,
}
