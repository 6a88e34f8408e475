//! Adapters from code which signals failure by panicking or raising an error
//! into [`Result`].
//!
//! Panics are caught with [`std::panic::catch_unwind`], so nothing is captured
//! when the crate is built with `panic = "abort"`. The process panic hook is
//! left in place and still reports the panic.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use log::debug;

use crate::{result::Result, unwrap::UnwrapFailed};

#[derive(thiserror::Error, Debug)]
pub enum Exception {
    #[error("callee returned no value where one was required")]
    NullViolation,

    #[error("{message}")]
    Panicked {
        message: String,
        payload: Box<dyn Any + Send>,
    },

    #[error(transparent)]
    Raised(#[from] anyhow::Error),
}

impl Exception {
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The object the callee panicked with, if it panicked.
    pub fn panic_payload(&self) -> Option<&(dyn Any + Send)> {
        match self {
            Self::Panicked { payload, .. } => Some(&**payload),
            _ => None,
        }
    }

    /// The unwrap failure the callee panicked with, if any.
    pub fn unwrap_failure(&self) -> Option<&UnwrapFailed> {
        self.panic_payload()?.downcast_ref()
    }
}

/// Calls `f`, capturing any panic as `Err(Exception::Panicked)`.
///
/// The panic hook still runs, so a captured panic is reported on stderr.
pub fn attempt<U>(f: impl FnOnce() -> U) -> Result<U, Exception> {
    catching(f)
}

/// Calls `f`, treating a missing value as a broken postcondition.
pub fn attempt_some<U>(f: impl FnOnce() -> Option<U>) -> Result<U, Exception> {
    catching(f).and_then(|value| match value {
        Some(value) => Result::Ok(value),
        None => {
            debug!("attempted call returned no value");
            Result::Err(Exception::NullViolation)
        }
    })
}

/// Calls `f`, capturing both the error it returns and any panic.
pub fn attempt_fallible<U>(f: impl FnOnce() -> anyhow::Result<U>) -> Result<U, Exception> {
    catching(f).and_then(|res| match res {
        Ok(value) => Result::Ok(value),
        Err(err) => {
            debug!("attempted call raised: {err:#}");
            Result::Err(Exception::Raised(err))
        }
    })
}

fn catching<U>(f: impl FnOnce() -> U) -> Result<U, Exception> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Result::Ok(value),
        Err(payload) => {
            let message = panic_message(&*payload);
            debug!("attempted call panicked: {message}");
            Result::Err(Exception::Panicked { message, payload })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(failure) = payload.downcast_ref::<UnwrapFailed>() {
        failure.to_string()
    } else {
        "Box<dyn Any>".to_owned()
    }
}
