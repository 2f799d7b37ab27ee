use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("connection: remote offer missing")]
    ErrMissingOffer,
    #[error("connection: closed")]
    ErrConnectionClosed,
    #[error("negotiator: failed to start connection: {0}")]
    ErrNegotiationFailed(String),
    #[error("message: payload has no session description")]
    ErrMissingSdp,
    #[error("message: payload has no ice candidate")]
    ErrMissingCandidate,
    #[error("message: malformed signaling message: {0}")]
    ErrMalformedMessage(String),

    #[error("{0}")]
    Std(#[source] StdError),
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn from_std<T>(error: T) -> Self
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        Error::Std(StdError(Box::new(error)))
    }

    pub fn downcast_ref<T: std::error::Error + 'static>(&self) -> Option<&T> {
        if let Error::Std(s) = self {
            return s.0.downcast_ref();
        }

        None
    }
}

/// An escape hatch to preserve stack traces when we don't know the error.
///
/// Negotiator implementations live outside this workspace and fail with their
/// own error types. `Error::from_std` keeps the underlying error around so it
/// can be recovered with [`Error::downcast_ref`].
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StdError(pub Box<dyn std::error::Error + Send + Sync>);

impl PartialEq for StdError {
    fn eq(&self, _: &Self) -> bool {
        false
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::ErrMalformedMessage(e.to_string())
    }
}

/// flatten_errs flattens multiple errors into one
pub fn flatten_errs(errs: Vec<impl Into<Error>>) -> Result<()> {
    if errs.is_empty() {
        Ok(())
    } else {
        let errs_strs: Vec<String> = errs.into_iter().map(|e| e.into().to_string()).collect();
        Err(Error::Other(errs_strs.join("\n")))
    }
}
