//! Workbook-to-dictionary pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the `survey`, `choices`, and `settings` sheets
//! 2. **Parse**: build the question sequence and group records
//! 3. **Render**: write the HTML document
//!
//! Each stage takes the output of the previous stage; only ingest and the
//! final write can fail.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use xlsform_ingest::load_form;
use xlsform_parse::parse;
use xlsform_report::write_report;

use crate::types::{FormReport, GenerateResult};

/// Convert a workbook into an HTML data dictionary at `output`.
pub fn generate(workbook: &Path, output: &Path) -> Result<GenerateResult> {
    let definition =
        load_form(workbook).with_context(|| format!("load {}", workbook.display()))?;
    let form = parse(&definition.survey, &definition.choices);
    debug!(
        questions = form.questions.len(),
        groups = form.groups.len(),
        "parsed form"
    );
    write_report(output, &form, &definition.settings)?;
    info!(
        questions = form.questions.len(),
        output = %output.display(),
        "wrote data dictionary"
    );
    Ok(GenerateResult {
        workbook: workbook.to_path_buf(),
        output: output.to_path_buf(),
        report: FormReport::new(&form, &definition.settings),
    })
}

/// Load and parse a workbook without writing any output.
pub fn inspect(workbook: &Path) -> Result<FormReport> {
    let definition =
        load_form(workbook).with_context(|| format!("load {}", workbook.display()))?;
    let form = parse(&definition.survey, &definition.choices);
    Ok(FormReport::new(&form, &definition.settings))
}
