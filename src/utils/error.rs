use thiserror::Error;

#[derive(Error, Debug)]
pub enum SisError {
    /// Invalid or contradictory query parameters. Raised before any
    /// network call is made.
    #[error("invalid query: {0}")]
    Input(String),

    /// The credentials file is missing the (app_id, app_key) pair for a
    /// required service. Raised at startup, never per call.
    #[error("missing credentials for the {service} service")]
    Config { service: &'static str },

    #[error("invalid base URL for the {service} service: {url} ({reason})")]
    InvalidUrl {
        service: &'static str,
        url: String,
        reason: String,
    },

    /// A term, section, or person does not exist upstream. Terminal,
    /// never retried.
    #[error("{what} not found: {key}")]
    NotFound { what: &'static str, key: String },

    /// A reachable service returned an error status or a malformed
    /// payload. Terminal for the current query.
    #[error("{service} service error ({context}): {message}")]
    Upstream {
        service: &'static str,
        context: String,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SisError {
    pub fn input(message: impl Into<String>) -> Self {
        SisError::Input(message.into())
    }

    pub fn not_found(what: &'static str, key: impl Into<String>) -> Self {
        SisError::NotFound {
            what,
            key: key.into(),
        }
    }

    pub fn upstream(
        service: &'static str,
        context: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        SisError::Upstream {
            service,
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Process exit code for the CLI wrapper.
    pub fn exit_code(&self) -> i32 {
        match self {
            SisError::Input(_) => 2,
            SisError::Config { .. }
            | SisError::InvalidUrl { .. }
            | SisError::Io(_)
            | SisError::Serialization(_) => 3,
            SisError::NotFound { .. } => 4,
            SisError::Upstream { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SisError>;
