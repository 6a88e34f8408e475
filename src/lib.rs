#![deny(missing_debug_implementations)]

//! Domain primitives: a `Result` algebra with a full set of combinators, a
//! panic-capturing adapter into it, a payload-less [`Outcome`] and
//! identity-based equality for entities.

pub mod attempt;
pub mod entity;
pub mod outcome;
pub mod result;
pub mod unwrap;

pub use crate::{
    attempt::{attempt, attempt_fallible, attempt_some, Exception},
    entity::{ConcreteType, Entity, IdentityKey},
    outcome::{Error, InvalidOutcome, Outcome},
    result::{Result, Tag},
    unwrap::UnwrapFailed,
};
