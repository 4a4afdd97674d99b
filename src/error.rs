use thiserror::Error;

/// Configuration errors raised while registering diagnostic pages at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZPagesError {
    #[error("Diagnostic endpoint {endpoint} is already registered")]
    DuplicateEndpoint { endpoint: String },

    #[error("{name} {category} probe is already registered")]
    DuplicateProbe { name: String, category: String },
}
