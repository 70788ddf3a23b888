/*
 * result.rs
 *
 * Fallible-result container, same termination contract as option.rs.
 * Recoverable handling belongs to ordinary match/combinator code on the
 * producer side; once an accessor asserts a state the container is not in,
 * the only outcome is the hook.
 */

use core::fmt;

use crate::helpers;

/// A success-or-error value with fail-stop invalid-access semantics.
///
/// Accessors are split into value-returning-by-move (`unwrap`, `expect`,
/// `unwrap_err`, `expect_err`) and reference-returning (`value`,
/// `err_value`); each has its own canned diagnostic so the report names the
/// exact accessor that was misused.
///
/// # Examples
///
/// ```
/// use failstop::Result::{self, Err, Ok};
///
/// let r: Result<u32, &str> = Ok(12);
/// assert_eq!(r.unwrap(), 12);
///
/// let r: Result<u32, &str> = Err("worn gasket");
/// assert_eq!(r.unwrap_err(), "worn gasket");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Result<T, E> {
    /// The success state, owning a `T`.
    Ok(T),
    /// The error state, owning an `E`.
    Err(E),
}

use self::Result::{Err, Ok};

impl<T, E> Result<T, E> {
    /// `true` in the success state.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Ok(_))
    }

    /// `true` in the error state.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Err(_))
    }

    /// Borrowing view of the container: `Result<&T, &E>` in the same state.
    #[must_use]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error),
        }
    }
}

impl<T, E: fmt::Debug> Result<T, E> {
    /// Move the success value out, panicking with `message` (and the error
    /// attached to the report) in the error state.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Ok(value) => value,
            Err(error) => helpers::result::expect_failed(message, &error),
        }
    }

    /// Move the success value out.
    ///
    /// Panics with `"called Result::unwrap() on an Err value"`, the error
    /// attached, in the error state.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => helpers::result::unwrap_failed(&error),
        }
    }

    /// Borrow the success value without moving it out.
    ///
    /// Panics with `"called Result::value() on an Err value"`, the error
    /// attached, in the error state.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Ok(value) => value,
            Err(error) => helpers::result::value_failed(error),
        }
    }
}

impl<T: fmt::Debug, E> Result<T, E> {
    /// Move the error out, panicking with `message` (and the unexpected
    /// success value attached) in the success state.
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Ok(value) => helpers::result::expect_err_failed(message, &value),
            Err(error) => error,
        }
    }

    /// Move the error out.
    ///
    /// Panics with `"called Result::unwrap_err() on an Ok value"`, the
    /// success value attached, in the success state.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Ok(value) => helpers::result::unwrap_err_failed(&value),
            Err(error) => error,
        }
    }

    /// Borrow the error without moving it out.
    ///
    /// Panics with `"called Result::err_value() on an Ok value"`, the
    /// success value attached, in the success state.
    #[track_caller]
    pub fn err_value(&self) -> &E {
        match self {
            Ok(value) => helpers::result::err_value_failed(value),
            Err(error) => error,
        }
    }
}

/* bridges to and from the core type, for interop at crate boundaries */

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            core::result::Result::Ok(value) => Ok(value),
            core::result::Result::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => core::result::Result::Ok(value),
            Err(error) => core::result::Result::Err(error),
        }
    }
}
