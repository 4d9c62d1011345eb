use clap::error::ErrorKind;
use thiserror::Error;

/// An invocation that did not resolve to a runnable command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvocationError {
    #[error("usage error: {0}")]
    Usage(String),
    #[error("type error: {0}")]
    Type(String),
}

impl InvocationError {
    /// Short label used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::Type(_) => "type",
        }
    }

    /// Classifies a parser error. Help and version requests are not errors and
    /// yield `None`.
    pub fn from_clap(err: &clap::Error) -> Option<Self> {
        let detail = err
            .get(clap::error::ContextKind::InvalidArg)
            .map(ToString::to_string)
            .unwrap_or_else(|| err.kind().to_string());

        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
            ErrorKind::InvalidValue | ErrorKind::ValueValidation => Some(Self::Type(detail)),
            _ => Some(Self::Usage(detail)),
        }
    }
}
