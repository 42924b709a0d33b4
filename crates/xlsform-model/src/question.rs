//! Normalized question records produced by parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display heading of a question: the label text plus an optional
/// de-emphasized `[name]` suffix.
///
/// The suffix is present only when the row carries both a label and a name;
/// a row with a name and no label uses the bare name as its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    pub suffix: Option<String>,
}

impl Heading {
    pub fn from_parts(label: Option<&str>, name: Option<&str>) -> Self {
        match (label, name) {
            (Some(label), Some(name)) => Self {
                text: label.to_string(),
                suffix: Some(name.to_string()),
            },
            (Some(label), None) => Self {
                text: label.to_string(),
                suffix: None,
            },
            (None, name) => Self {
                text: name.unwrap_or_default().to_string(),
                suffix: None,
            },
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suffix {
            Some(suffix) => write!(f, "{} [{}]", self.text, suffix),
            None => write!(f, "{}", self.text),
        }
    }
}

/// One question of the parsed form, in original row order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub heading: Heading,
    pub name: Option<String>,
    /// The raw type cell, e.g. `"text"` or `"select_one yn"`.
    pub type_tag: String,
    pub hint: Option<String>,
    /// Relevance condition after placeholder stripping and name-to-label
    /// substitution.
    pub relevant: Option<String>,
    pub constraint: Option<String>,
    pub required: bool,
    /// Ordered choice labels; empty unless the type names a choice list.
    pub choices: Vec<String>,
    /// Group/repeat nesting depth when the row was seen.
    pub group_level: usize,
    /// Display name of the innermost open group or repeat.
    pub group: Option<String>,
}

/// Whether a group record came from `begin_group` or `begin_repeat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    Group,
    Repeat,
}

/// One record per `begin_group`/`begin_repeat` row, in first-seen order.
///
/// `title` is the value pushed on the group stack (label, else name) and is
/// what question `group` fields refer back to. `relevant` is the raw cell,
/// not rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupInfo {
    pub kind: GroupKind,
    pub title: String,
    pub name: Option<String>,
    pub label: Option<String>,
    pub relevant: Option<String>,
    /// Stack depth after the push that created this record.
    pub depth: usize,
}

/// Output of one parsing pass over the survey sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedForm {
    pub questions: Vec<Question>,
    pub groups: Vec<GroupInfo>,
}

impl ParsedForm {
    /// Distinct non-empty `group` values in first-seen question order.
    pub fn distinct_groups(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for question in &self.questions {
            if let Some(group) = question.group.as_deref()
                && !seen.contains(&group)
            {
                seen.push(group);
            }
        }
        seen
    }

    /// The `begin_*` record matching a group title, when one exists.
    pub fn group_info(&self, title: &str) -> Option<&GroupInfo> {
        self.groups.iter().find(|info| info.title == title)
    }
}
