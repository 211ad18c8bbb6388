use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum WorkflowDomainError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("event was already decided in the current review cycle")]
    AlreadyDecided,

    #[error("system failure: {0}")]
    SystemFailure(String),
}

impl WorkflowDomainError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "unauthorized",
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidState(_) => "invalid_state",
            Self::NotFound(_) => "not_found",
            Self::AlreadyDecided => "already_decided",
            Self::SystemFailure(_) => "system_failure",
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SystemFailure(_))
    }
}

impl From<sqlx::Error> for WorkflowDomainError {
    fn from(error: sqlx::Error) -> Self {
        // SQLSTATE classes 22 (data exception) and 23 (constraint violation)
        // are caused by the request and never succeed on retry.
        let sqlstate = error
            .as_database_error()
            .and_then(|db| db.code())
            .map(|code| code.into_owned());

        match sqlstate.as_deref() {
            Some(code) if code.starts_with("22") || code.starts_with("23") => {
                Self::InvalidInput(error.to_string())
            }
            _ => Self::SystemFailure(error.to_string()),
        }
    }
}
