use std::iter::FusedIterator;

use dupe::Dupe;
use strum::Display;

use crate::unwrap::unwrap_failed;

/// Either a value produced by a successful computation or the error which
/// prevented it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<T, E> {
    Ok(T),
    Err(E),
}

/// The variant of a [`Result`], without its payload.
#[derive(Copy, Clone, Debug, Dupe, PartialEq, Eq, Hash, Display)]
pub enum Tag {
    Ok,
    Err,
}

impl<T, E> Result<T, E> {
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Ok(_) => Tag::Ok,
            Self::Err(_) => Tag::Err,
        }
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns true if this is `Ok` and its value satisfies `pred`. The
    /// predicate is not called on `Err`.
    pub fn is_ok_and(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Self::Ok(value) => pred(value),
            Self::Err(_) => false,
        }
    }

    /// Returns true if this is `Err` and its error satisfies `pred`. The
    /// predicate is not called on `Ok`.
    pub fn is_err_and(&self, pred: impl FnOnce(&E) -> bool) -> bool {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => pred(error),
        }
    }

    /// Borrows the value if this is `Ok`.
    pub const fn as_ok(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Borrows the error if this is `Err`.
    pub const fn as_err(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
        match self {
            Self::Ok(value) => Result::Ok(f(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(f(error)),
        }
    }

    /// Applies `f` to the value, or returns `default` if this is `Err`.
    ///
    /// `default` is evaluated eagerly, see [`Result::map_or_else`] to compute
    /// it from the error instead.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    pub fn map_or_else<U>(self, on_err: impl FnOnce(E) -> U, on_ok: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Calls `f` with the value and returns its result, or propagates the
    /// error untouched.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Calls `f` with the error and returns its result, or propagates the
    /// value untouched.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Result<T, F>) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => res,
            Self::Err(error) => Result::Err(error),
        }
    }

    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(_) => res,
        }
    }

    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Returns the value, or `T::default()` if this is `Err`. Use
    /// [`Result::ok`] to tell the two cases apart.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    /// Returns an iterator over the value, which is empty if this is `Err`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ok(),
        }
    }

    pub fn into_std(self) -> std::result::Result<T, E> {
        self.into()
    }
}

impl<T, E: std::fmt::Debug> Result<T, E> {
    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapFailed`](crate::UnwrapFailed) payload carrying
    /// the error if this is `Err`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => unwrap_failed(
                "called `Result::unwrap()` on an `Err` value",
                &error,
                Tag::Err,
            ),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` and the error if this is `Err`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => unwrap_failed(msg, &error, Tag::Err),
        }
    }
}

impl<T: std::fmt::Debug, E> Result<T, E> {
    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapFailed`](crate::UnwrapFailed) payload carrying
    /// the value if this is `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(value) => unwrap_failed(
                "called `Result::unwrap_err()` on an `Ok` value",
                &value,
                Tag::Ok,
            ),
            Self::Err(error) => error,
        }
    }

    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Self::Ok(value) => unwrap_failed(msg, &value, Tag::Ok),
            Self::Err(error) => error,
        }
    }
}

impl<T, E> Result<Result<T, E>, E> {
    pub fn flatten(self) -> Result<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(res: std::result::Result<T, E>) -> Self {
        match res {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self.ok() }
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod test {
    use std::{cell::Cell, panic};

    use pretty_assertions::assert_eq;

    use crate::unwrap::UnwrapFailed;

    use super::*;

    type Res = Result<i32, &'static str>;

    const OK: Res = Result::Ok(7);
    const ERR: Res = Result::Err("nope");

    fn unwrap_failure(f: impl FnOnce() + panic::UnwindSafe) -> UnwrapFailed {
        let payload = panic::catch_unwind(f).expect_err("expected a panic");
        *payload
            .downcast::<UnwrapFailed>()
            .expect("panic payload was not UnwrapFailed")
    }

    #[test]
    fn tags() {
        assert!(OK.is_ok());
        assert!(!OK.is_err());
        assert!(ERR.is_err());
        assert!(!ERR.is_ok());

        assert_eq!(OK.tag(), Tag::Ok);
        assert_eq!(ERR.tag(), Tag::Err);
        assert_eq!(
            [Tag::Ok, Tag::Err].map(|tag| tag.to_string()),
            ["Ok", "Err"]
        );
    }

    #[test]
    fn payload_queries() {
        assert_eq!(OK.as_ok(), Some(&7));
        assert_eq!(OK.as_err(), None);
        assert_eq!(ERR.as_ok(), None);
        assert_eq!(ERR.as_err(), Some(&"nope"));

        assert_eq!(OK.as_ref(), Result::Ok(&7));
        assert_eq!(ERR.as_ref(), Result::Err(&"nope"));

        assert_eq!(OK.ok(), Some(7));
        assert_eq!(OK.err(), None);
        assert_eq!(ERR.ok(), None);
        assert_eq!(ERR.err(), Some("nope"));
    }

    #[test]
    fn predicates() {
        assert!(OK.is_ok_and(|value| *value == 7));
        assert!(!OK.is_ok_and(|value| *value == 8));
        assert!(ERR.is_err_and(|error| error.starts_with("no")));
        assert!(!ERR.is_err_and(|error| error.is_empty()));

        let calls = Cell::new(0);
        assert!(!ERR.is_ok_and(|_| {
            calls.set(calls.get() + 1);
            true
        }));
        assert!(!OK.is_err_and(|_| {
            calls.set(calls.get() + 1);
            true
        }));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn equality() {
        assert_eq!(OK, Result::Ok(7));
        assert_ne!(OK, Result::Ok(8));
        assert_ne!(OK, ERR);
        assert_eq!(ERR, Result::Err("nope"));
        assert!(OK < ERR);

        let same_payload_ok: Result<&str, &str> = Result::Ok("x");
        let same_payload_err: Result<&str, &str> = Result::Err("x");
        assert_ne!(same_payload_ok, same_payload_err);
    }

    #[test]
    fn functor_laws() {
        assert_eq!(OK.map(|value| value), OK);

        let f = |value: i32| value + 1;
        let g = |value: i32| value * 10;
        assert_eq!(OK.map(f).map(g), OK.map(|value| g(f(value))));
        assert_eq!(OK.map(f).map(g), Result::Ok(80));
        assert_eq!(ERR.map(f).map(g), Result::Err("nope"));
    }

    #[test]
    fn map_err() {
        assert_eq!(ERR.map_err(str::len), Result::Err(4));
        assert_eq!(OK.map_err(str::len), Result::Ok(7));
    }

    #[test]
    fn short_circuits() {
        let calls = Cell::new(0);
        let count = || calls.set(calls.get() + 1);

        let _ = ERR.map(|value| {
            count();
            value
        });
        let _ = ERR.and_then(|value| {
            count();
            Res::Ok(value)
        });
        let _ = OK.map_err(|error| {
            count();
            error
        });
        let _ = OK.or_else(|error| {
            count();
            Res::Err(error)
        });
        let _ = OK.unwrap_or_else(|_| {
            count();
            0
        });
        let _ = ERR.map_or_else(
            |_| 0,
            |value| {
                count();
                value
            },
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn and_then() {
        let halve = |value: i32| -> Res {
            if value % 2 == 0 {
                Result::Ok(value / 2)
            } else {
                Result::Err("odd")
            }
        };

        // Left identity.
        assert_eq!(Res::Ok(8).and_then(halve), halve(8));
        assert_eq!(Res::Ok(7).and_then(halve), halve(7));

        // Right identity.
        assert_eq!(OK.and_then(Result::Ok), OK);

        assert_eq!(Res::Ok(8).and_then(halve).and_then(halve), Result::Ok(2));
        assert_eq!(Res::Ok(6).and_then(halve).and_then(halve), Result::Err("odd"));
        assert_eq!(ERR.and_then(halve), ERR);
    }

    #[test]
    fn or_else() {
        let recover = |error: &'static str| -> Result<i32, usize> {
            if error == "nope" {
                Result::Ok(0)
            } else {
                Result::Err(error.len())
            }
        };
        assert_eq!(OK.or_else(recover), Result::Ok(7));
        assert_eq!(ERR.or_else(recover), Result::Ok(0));
        assert_eq!(Res::Err("bad").or_else(recover), Result::Err(3));
    }

    #[test]
    fn eager_combinators() {
        assert_eq!(OK.and(Result::<&str, _>::Ok("next")), Result::Ok("next"));
        assert_eq!(ERR.and(Result::<&str, _>::Ok("next")), Result::Err("nope"));
        assert_eq!(OK.or(Result::<_, ()>::Ok(0)), Result::Ok(7));
        assert_eq!(ERR.or(Result::<_, ()>::Ok(0)), Result::Ok(0));
    }

    #[test]
    fn inspect() {
        let seen = Cell::new(None);
        assert_eq!(OK.inspect(|value| seen.set(Some(*value))), OK);
        assert_eq!(seen.get(), Some(7));

        let seen = Cell::new(None);
        assert_eq!(ERR.inspect(|value| seen.set(Some(*value))), ERR);
        assert_eq!(seen.get(), None);

        let seen = Cell::new(None);
        assert_eq!(ERR.inspect_err(|error| seen.set(Some(*error))), ERR);
        assert_eq!(seen.get(), Some("nope"));
    }

    #[test]
    fn fallbacks() {
        assert_eq!(OK.map_or(0, |value| value * 2), 14);
        assert_eq!(ERR.map_or(0, |value| value * 2), 0);

        assert_eq!(OK.map_or_else(str::len, |value| value as usize), 7);
        assert_eq!(ERR.map_or_else(str::len, |value| value as usize), 4);

        assert_eq!(OK.unwrap_or(0), 7);
        assert_eq!(ERR.unwrap_or(0), 0);

        assert_eq!(OK.unwrap_or_else(|error| error.len() as i32), 7);
        assert_eq!(ERR.unwrap_or_else(|error| error.len() as i32), 4);

        assert_eq!(OK.unwrap_or_default(), 7);
        assert_eq!(ERR.unwrap_or_default(), 0);
        assert_eq!(Result::<String, ()>::Err(()).unwrap_or_default(), "");
    }

    #[test]
    fn unwrap() {
        assert_eq!(OK.unwrap(), 7);
        assert_eq!(OK.expect("should be ok"), 7);
        assert_eq!(ERR.unwrap_err(), "nope");
        assert_eq!(ERR.expect_err("should be err"), "nope");

        let failure = unwrap_failure(|| {
            ERR.unwrap();
        });
        assert_eq!(failure.message(), "called `Result::unwrap()` on an `Err` value");
        assert_eq!(failure.payload(), r#""nope""#);
        assert_eq!(failure.found(), Tag::Err);

        let failure = unwrap_failure(|| {
            OK.unwrap_err();
        });
        assert_eq!(failure.message(), "called `Result::unwrap_err()` on an `Ok` value");
        assert_eq!(failure.payload(), "7");
        assert_eq!(failure.found(), Tag::Ok);
    }

    #[test]
    fn expect() {
        let failure = unwrap_failure(|| {
            ERR.expect("config should be loaded");
        });
        insta::assert_snapshot!(failure, @r#"config should be loaded: "nope""#);

        let failure = unwrap_failure(|| {
            OK.expect_err("parsing should fail");
        });
        insta::assert_snapshot!(failure, @"parsing should fail: 7");
    }

    #[test]
    fn iter() {
        let ok = OK;
        let err = ERR;
        assert_eq!(ok.iter().collect::<Vec<_>>(), [&7]);
        assert_eq!(err.iter().count(), 0);

        // Each call starts afresh.
        let first: Vec<_> = ok.iter().collect();
        let second: Vec<_> = ok.iter().collect();
        assert_eq!(first, second);

        let iter = ok.iter();
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.clone().count(), 1);
        assert_eq!(iter.count(), 1);

        let mut iter = ok.iter();
        assert_eq!(iter.next_back(), Some(&7));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        let mut total = 0;
        for value in &ok {
            total += value;
        }
        assert_eq!(total, 7);

        assert_eq!(ok.into_iter().collect::<Vec<_>>(), [7]);
        assert_eq!(err.into_iter().len(), 0);
    }

    #[test]
    fn flatten() {
        let nested: Result<Res, &str> = Result::Ok(OK);
        assert_eq!(nested.flatten(), OK);
        let nested: Result<Res, &str> = Result::Ok(ERR);
        assert_eq!(nested.flatten(), ERR);
        let nested: Result<Res, &str> = Result::Err("outer");
        assert_eq!(nested.flatten(), Result::Err("outer"));
    }

    #[test]
    fn std_conversions() -> std::result::Result<(), &'static str> {
        assert_eq!(Res::from(Ok(7)), OK);
        assert_eq!(Res::from(Err("nope")), ERR);
        assert_eq!(ERR.into_std(), Err("nope"));

        let value = OK.into_std()?;
        assert_eq!(value, 7);
        Ok(())
    }

    #[test]
    fn panics_in_closures_propagate() {
        let caught = panic::catch_unwind(|| OK.map(|_| -> i32 { panic!("boom") }));
        assert!(caught.is_err());
    }
}
