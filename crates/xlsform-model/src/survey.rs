//! Raw row records for the `survey` and `choices` sheets.

use serde::{Deserialize, Serialize};

/// One row of the `survey` sheet.
///
/// All fields except `row_type` are optional; a blank cell is `None`.
/// Columns the dictionary does not use are dropped at ingest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyRow {
    /// The raw `type` cell, possibly a compound token such as
    /// `"select_one yes_no"`. Empty when the cell is blank.
    pub row_type: String,
    pub name: Option<String>,
    pub label: Option<String>,
    pub hint: Option<String>,
    pub relevant: Option<String>,
    pub constraint: Option<String>,
    pub required: Option<String>,
}

impl SurveyRow {
    /// Classify the row by the first whitespace-separated token of its type.
    pub fn kind(&self) -> RowKind {
        match self.row_type.split_whitespace().next() {
            Some("begin_group") => RowKind::BeginGroup,
            Some("begin_repeat") => RowKind::BeginRepeat,
            Some("end_group") => RowKind::EndGroup,
            Some("end_repeat") => RowKind::EndRepeat,
            _ => RowKind::Question,
        }
    }

    /// True iff the `required` cell case-insensitively equals `"yes"`.
    pub fn is_required(&self) -> bool {
        self.required
            .as_deref()
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("yes"))
    }

    /// The display name a `begin_*` row contributes to the group stack:
    /// label when present, name otherwise.
    pub fn display_name(&self) -> Option<&str> {
        self.label.as_deref().or(self.name.as_deref())
    }
}

/// Structural classification of a survey row.
///
/// The structural tags form a closed set; anything else is a question row,
/// including rows with an unrecognized type that still carry a label or name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    BeginGroup,
    BeginRepeat,
    EndGroup,
    EndRepeat,
    Question,
}

impl RowKind {
    pub fn is_structural(self) -> bool {
        !matches!(self, RowKind::Question)
    }
}

/// Select-question flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectKind {
    One,
    Multiple,
}

/// Decompose a type tag into its select flavor and choice-list name.
///
/// Returns `None` for non-select types. A select tag with no second token
/// yields `Some((kind, None))`; the caller treats that as an empty choice
/// list, not an error.
pub fn select_list(type_tag: &str) -> Option<(SelectKind, Option<&str>)> {
    let mut tokens = type_tag.split_whitespace();
    let kind = match tokens.next() {
        Some("select_one") => SelectKind::One,
        Some("select_multiple") => SelectKind::Multiple,
        _ => return None,
    };
    Some((kind, tokens.next()))
}

/// One row of the `choices` sheet.
///
/// Rows sharing a `list_name` form, in sheet order, the option list for
/// that name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceRow {
    pub list_name: String,
    pub label: String,
}
