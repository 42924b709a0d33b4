use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a workbook.
///
/// Everything downstream of a successful load is infallible; this is the
/// whole input-access taxonomy.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("open workbook {}: {}", .path.display(), .source)]
    OpenWorkbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("read sheet '{name}': {source}")]
    ReadSheet {
        name: String,
        #[source]
        source: calamine::Error,
    },
    #[error("workbook has no '{0}' sheet")]
    MissingSheet(&'static str),
}
