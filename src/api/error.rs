use thiserror::Error;

/// Terminal failures of the inference gateway. Reconciliation failures are
/// not represented here; those fall through to the deterministic path.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("no active auth session")]
    AuthMissing,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("rate limited by inference service after {attempts} attempts")]
    RateLimited { attempts: u32 },

    #[error("inference service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("invalid response format from inference service")]
    InvalidResponseFormat,
}
