//! Result records for pipeline runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use xlsform_model::{FormMetadata, ParsedForm};

/// Outcome of a `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub workbook: PathBuf,
    pub output: PathBuf,
    pub report: FormReport,
}

/// Per-form counts printed after a run and emitted by `inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormReport {
    pub form_title: String,
    pub form_id: String,
    pub version: String,
    pub questions: usize,
    pub required: usize,
    pub with_choices: usize,
    /// One entry per group in first-seen question order; questions outside
    /// any group collect under `(ungrouped)`.
    pub groups: Vec<GroupCounts>,
}

/// Question counts for one row of the summary table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupCounts {
    pub title: String,
    pub questions: usize,
    pub required: usize,
    pub with_choices: usize,
}

/// Summary-table label for questions outside any group.
pub const UNGROUPED: &str = "(ungrouped)";

impl FormReport {
    pub fn new(form: &ParsedForm, metadata: &FormMetadata) -> Self {
        let mut groups: Vec<GroupCounts> = Vec::new();
        for question in &form.questions {
            let title = question.group.as_deref().unwrap_or(UNGROUPED);
            let idx = match groups.iter().position(|group| group.title == title) {
                Some(idx) => idx,
                None => {
                    groups.push(GroupCounts {
                        title: title.to_string(),
                        questions: 0,
                        required: 0,
                        with_choices: 0,
                    });
                    groups.len() - 1
                }
            };
            groups[idx].questions += 1;
            if question.required {
                groups[idx].required += 1;
            }
            if !question.choices.is_empty() {
                groups[idx].with_choices += 1;
            }
        }
        Self {
            form_title: metadata.form_title.clone(),
            form_id: metadata.form_id.clone(),
            version: metadata.version.clone(),
            questions: form.questions.len(),
            required: form.questions.iter().filter(|q| q.required).count(),
            with_choices: form
                .questions
                .iter()
                .filter(|q| !q.choices.is_empty())
                .count(),
            groups,
        }
    }
}
