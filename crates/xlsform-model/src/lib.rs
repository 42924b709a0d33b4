//! Data model for XLSForm survey definitions.
//!
//! The types here mirror the three sheets of an XLSForm workbook (`survey`,
//! `choices`, `settings`) plus the normalized question records produced by
//! parsing. Everything is a plain value record; nothing here does I/O.

mod form;
mod question;
mod survey;

pub use form::{FormDefinition, FormMetadata};
pub use question::{GroupInfo, GroupKind, Heading, ParsedForm, Question};
pub use survey::{ChoiceRow, RowKind, SelectKind, SurveyRow, select_list};
