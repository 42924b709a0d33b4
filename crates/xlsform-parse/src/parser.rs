//! The parsing pass over the survey sheet.

use std::collections::BTreeMap;

use tracing::debug;

use xlsform_model::{
    ChoiceRow, GroupInfo, GroupKind, Heading, ParsedForm, Question, RowKind, SurveyRow,
    select_list,
};

use crate::rewrite::rewrite_relevant;

/// Walk the survey rows in sheet order and produce the question sequence.
///
/// Structural rows contribute no output records; they only move the group
/// stack, which determines the `group_level` and `group` of every question
/// after them. Unbalanced markers are absorbed silently: a stray `end_*`
/// pops nothing, and groups left open at the end of input simply stay open.
pub fn parse(survey: &[SurveyRow], choices: &[ChoiceRow]) -> ParsedForm {
    let labels = name_label_lookup(survey);
    let mut stack: Vec<String> = Vec::new();
    let mut questions = Vec::new();
    let mut groups = Vec::new();

    for row in survey {
        match row.kind() {
            kind @ (RowKind::BeginGroup | RowKind::BeginRepeat) => {
                let title = row.display_name().unwrap_or_default().to_string();
                stack.push(title.clone());
                if !title.is_empty() {
                    groups.push(GroupInfo {
                        kind: if kind == RowKind::BeginRepeat {
                            GroupKind::Repeat
                        } else {
                            GroupKind::Group
                        },
                        title,
                        name: row.name.clone(),
                        label: row.label.clone(),
                        relevant: row.relevant.clone(),
                        depth: stack.len(),
                    });
                }
            }
            RowKind::EndGroup | RowKind::EndRepeat => {
                stack.pop();
            }
            RowKind::Question => {
                if row.label.is_none() && row.name.is_none() {
                    continue;
                }
                questions.push(build_question(row, choices, &labels, &stack));
            }
        }
    }

    debug!(
        questions = questions.len(),
        groups = groups.len(),
        open_groups = stack.len(),
        "parsed survey sheet"
    );
    ParsedForm { questions, groups }
}

/// Name-to-label lookup over every row carrying both fields.
/// Later rows overwrite earlier ones with the same name.
fn name_label_lookup(survey: &[SurveyRow]) -> BTreeMap<String, String> {
    let mut lookup = BTreeMap::new();
    for row in survey {
        if let (Some(name), Some(label)) = (&row.name, &row.label) {
            lookup.insert(name.clone(), label.clone());
        }
    }
    lookup
}

fn build_question(
    row: &SurveyRow,
    choices: &[ChoiceRow],
    labels: &BTreeMap<String, String>,
    stack: &[String],
) -> Question {
    Question {
        heading: Heading::from_parts(row.label.as_deref(), row.name.as_deref()),
        name: row.name.clone(),
        type_tag: row.row_type.clone(),
        hint: row.hint.clone(),
        relevant: row
            .relevant
            .as_deref()
            .map(|expr| rewrite_relevant(expr, labels)),
        constraint: row.constraint.clone(),
        required: row.is_required(),
        choices: collect_choices(&row.row_type, choices),
        group_level: stack.len(),
        group: stack.last().filter(|title| !title.is_empty()).cloned(),
    }
}

/// Choice labels for a select-type row, in choices-sheet order.
/// Non-select types, a missing list token, and an unknown list all yield
/// an empty list.
fn collect_choices(type_tag: &str, choices: &[ChoiceRow]) -> Vec<String> {
    let Some((_, Some(list_name))) = select_list(type_tag) else {
        return Vec::new();
    };
    choices
        .iter()
        .filter(|choice| choice.list_name == list_name)
        .map(|choice| choice.label.clone())
        .collect()
}
