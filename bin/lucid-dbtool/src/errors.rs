use std::fmt;

/// Errors displayed to the user when using the CLI
#[derive(Debug)]
pub(crate) enum DisplayedError {
    /// Errors the user can address by providing different input
    UserError(String, Box<dyn fmt::Debug>),
    /// Internal errors encountered when servicing the request
    InternalError(String, Box<dyn fmt::Debug>),
}

pub(crate) trait DisplayableError {
    type Output;
    fn user_error(self, msg: impl Into<String>) -> Result<Self::Output, DisplayedError>;
    fn internal_error(self, msg: impl Into<String>) -> Result<Self::Output, DisplayedError>;
}

impl<T, E: fmt::Debug + 'static> DisplayableError for Result<T, E> {
    type Output = T;

    fn user_error(self, msg: impl Into<String>) -> Result<Self::Output, DisplayedError> {
        self.map_err(|e| DisplayedError::UserError(msg.into(), Box::new(e)))
    }

    fn internal_error(self, msg: impl Into<String>) -> Result<Self::Output, DisplayedError> {
        self.map_err(|e| DisplayedError::InternalError(msg.into(), Box::new(e)))
    }
}

impl fmt::Display for DisplayedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayedError::UserError(msg, e) => write!(f, "User error: {msg}: {e:?}"),
            DisplayedError::InternalError(msg, e) => write!(f, "Internal error: {msg}: {e:?}"),
        }
    }
}
