//! Output surfaces for computed flights: text and JSON reports, SVG charts.
//!
//! Nothing in [`crate::core`] depends on this module.

pub mod plot;
pub mod report;

use thiserror::Error;

pub type PresenterResult<T> = Result<T, PresenterError>;

#[derive(Error, Debug)]
pub enum PresenterError {
    #[error("chart rendering failed: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
