use thiserror::Error;

/// Errors raised while decoding a catalog document.
///
/// Building a catalog from already-decoded [`Record`](crate::Record)s never
/// fails; only the JSON edge can.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog document must be an array or an object, found {0}")]
    UnexpectedShape(&'static str),
}
