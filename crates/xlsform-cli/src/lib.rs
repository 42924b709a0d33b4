//! CLI library components for the XLSForm data-dictionary generator.

pub mod logging;
pub mod pipeline;
pub mod types;
