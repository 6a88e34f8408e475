use std::{fmt::Debug, panic};

use derive_new::new;

use crate::result::Tag;

/// Panic payload raised when an unsafe extractor meets the wrong variant.
///
/// Handlers installed around a panic boundary can recover it with
/// `payload.downcast::<UnwrapFailed>()`.
#[derive(new, thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("{message}: {payload}")]
pub struct UnwrapFailed {
    message: String,
    payload: String,
    found: Tag,
}

impl UnwrapFailed {
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The `Debug` rendering of the payload of the variant which was found.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn found(&self) -> Tag {
        self.found
    }
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn unwrap_failed(msg: &str, payload: &dyn Debug, found: Tag) -> ! {
    panic::panic_any(UnwrapFailed::new(
        msg.to_owned(),
        format!("{payload:?}"),
        found,
    ))
}
