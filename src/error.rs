use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("raw material id {0} appears more than once")]
    DuplicateRawMaterial(u32),
    #[error("product EAN {0} appears more than once")]
    DuplicateProduct(String),
    #[error("product with EAN {0} not found")]
    ProductNotFound(String),
}
