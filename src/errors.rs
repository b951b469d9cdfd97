use thiserror::Error;

/// Errors raised while parsing task metadata at the crate boundary.
///
/// The reconciliation engine itself never fails; malformed payloads are
/// rejected here, before any content reaches it.
#[derive(Error, Debug)]
pub enum TaskPayloadError {
    #[error("Failed to parse task metadata: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Task metadata is missing a usable `{0}` field")]
    MissingField(&'static str),
}
