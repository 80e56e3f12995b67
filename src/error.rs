// error.rs - Boundary failures
//
// The simulation itself never fails. Everything here comes from the edges:
// config parsing and acquiring browser objects.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },

    #[error("canvas has no 2d context")]
    NoContext,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("unknown burst preset {0:?}")]
    UnknownPreset(String),
}
