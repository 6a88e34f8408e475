use std::{fmt::Display, panic, sync::Arc};

use dupe::Dupe;
use lazy_static::lazy_static;

use crate::result::Result;

lazy_static! {
    static ref NONE: Error = Error {
        code: Arc::from(""),
        description: None,
    };
}

/// An error code with an optional human-readable description.
#[derive(Clone, Debug, Dupe, PartialEq, Eq, Hash)]
pub struct Error {
    code: Arc<str>,
    description: Option<Arc<str>>,
}

impl Error {
    pub fn new(code: impl Into<Arc<str>>) -> Self {
        Self {
            code: code.into(),
            description: None,
        }
    }

    pub fn with_description(code: impl Into<Arc<str>>, description: impl Into<Arc<str>>) -> Self {
        let description: Arc<str> = description.into();
        Self {
            code: code.into(),
            description: (!description.is_empty()).then_some(description),
        }
    }

    /// The error which denotes the absence of an error.
    pub fn none() -> Self {
        NONE.dupe()
    }

    pub fn is_none(&self) -> bool {
        self.code.is_empty() && self.description.is_none()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {description}", self.code),
            None => self.code.fmt(f),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InvalidOutcome {
    #[error("invalid `error` argument: a successful outcome cannot carry an error, found {0}")]
    SuccessWithError(Error),

    #[error("invalid `error` argument: a failed outcome must carry an error other than none")]
    FailureWithoutError,
}

/// Success or failure without a payload. A failure carries an [`Error`].
#[derive(Clone, Debug, Dupe, PartialEq, Eq, Hash)]
#[must_use]
pub struct Outcome {
    error: Error,
}

impl Outcome {
    pub fn success() -> Self {
        Self {
            error: Error::none(),
        }
    }

    /// # Panics
    ///
    /// Panics with an [`InvalidOutcome`] payload if `error` is [`Error::none`].
    #[track_caller]
    pub fn failure(error: Error) -> Self {
        Self::new(false, error)
    }

    /// # Panics
    ///
    /// Panics with an [`InvalidOutcome`] payload unless `error` is
    /// [`Error::none`] exactly when `is_success` holds.
    #[track_caller]
    pub fn new(is_success: bool, error: Error) -> Self {
        match Self::try_new(is_success, error) {
            Ok(outcome) => outcome,
            Err(invalid) => panic::panic_any(invalid),
        }
    }

    pub fn try_failure(error: Error) -> std::result::Result<Self, InvalidOutcome> {
        Self::try_new(false, error)
    }

    pub fn try_new(is_success: bool, error: Error) -> std::result::Result<Self, InvalidOutcome> {
        match (is_success, error.is_none()) {
            (true, false) => Err(InvalidOutcome::SuccessWithError(error)),
            (false, true) => Err(InvalidOutcome::FailureWithoutError),
            _ => Ok(Self { error }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn error(&self) -> &Error {
        &self.error
    }

    pub fn into_result(self) -> Result<(), Error> {
        if self.is_success() {
            Result::Ok(())
        } else {
            Result::Err(self.error)
        }
    }
}

impl From<Outcome> for Result<(), Error> {
    fn from(outcome: Outcome) -> Self {
        outcome.into_result()
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_success() {
            f.write_str("success")
        } else {
            write!(f, "failure ({})", self.error)
        }
    }
}
