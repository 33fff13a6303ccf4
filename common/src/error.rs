use thiserror::Error;

/// Failures of the diagnostic run itself, as opposed to probe failures,
/// which are normalized into outcomes and never surface as errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatecheckError {
    #[error("domain must not be empty")]
    EmptyDomain,
}
