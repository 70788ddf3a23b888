/*
 * helpers.rs
 *
 * One panic helper per invalid-access scenario, split by container.
 *
 * Inline and #[track_caller]: the location that reaches the hook is the
 * line where user code called the accessor, never a line in here - the
 * attribute chain forwards the caller's position without recapturing it.
 * Canned messages live here and nowhere else.
 */

use core::fmt;

use crate::location::SourceLocation;
use crate::panicking::panic_at;

pub(crate) mod option {
    use super::*;

    /// panic helper for `Option<T>::expect()` when no value is present
    #[inline]
    #[track_caller]
    pub(crate) fn expect_failed(message: &str) -> ! {
        panic_at(message, None, SourceLocation::current())
    }

    /// panic helper for `Option<T>::expect_none()` when a value is present
    #[inline]
    #[track_caller]
    pub(crate) fn expect_none_failed(message: &str, value: &dyn fmt::Debug) -> ! {
        panic_at(message, Some(value), SourceLocation::current())
    }

    /// panic helper for `Option<T>::unwrap()` when no value is present
    #[inline]
    #[track_caller]
    pub(crate) fn unwrap_failed() -> ! {
        panic_at(
            "called Option::unwrap() on a None value",
            None,
            SourceLocation::current(),
        )
    }

    /// panic helper for `Option<T>::value()` when no value is present
    #[inline]
    #[track_caller]
    pub(crate) fn value_failed() -> ! {
        panic_at(
            "called Option::value() on a None value",
            None,
            SourceLocation::current(),
        )
    }

    /// panic helper for `Option<T>::unwrap_none()` when a value is present
    #[inline]
    #[track_caller]
    pub(crate) fn unwrap_none_failed(value: &dyn fmt::Debug) -> ! {
        panic_at(
            "called Option::unwrap_none() on a Some value",
            Some(value),
            SourceLocation::current(),
        )
    }
}

pub(crate) mod result {
    use super::*;

    /// panic helper for `Result<T, E>::expect()` when the result is an Err
    #[inline]
    #[track_caller]
    pub(crate) fn expect_failed(message: &str, error: &dyn fmt::Debug) -> ! {
        panic_at(message, Some(error), SourceLocation::current())
    }

    /// panic helper for `Result<T, E>::expect_err()` when the result is an Ok
    #[inline]
    #[track_caller]
    pub(crate) fn expect_err_failed(message: &str, value: &dyn fmt::Debug) -> ! {
        panic_at(message, Some(value), SourceLocation::current())
    }

    /// panic helper for `Result<T, E>::unwrap()` when the result is an Err
    #[inline]
    #[track_caller]
    pub(crate) fn unwrap_failed(error: &dyn fmt::Debug) -> ! {
        panic_at(
            "called Result::unwrap() on an Err value",
            Some(error),
            SourceLocation::current(),
        )
    }

    /// panic helper for `Result<T, E>::value()` when the result is an Err
    #[inline]
    #[track_caller]
    pub(crate) fn value_failed(error: &dyn fmt::Debug) -> ! {
        panic_at(
            "called Result::value() on an Err value",
            Some(error),
            SourceLocation::current(),
        )
    }

    /// panic helper for `Result<T, E>::unwrap_err()` when the result is an Ok
    #[inline]
    #[track_caller]
    pub(crate) fn unwrap_err_failed(value: &dyn fmt::Debug) -> ! {
        panic_at(
            "called Result::unwrap_err() on an Ok value",
            Some(value),
            SourceLocation::current(),
        )
    }

    /// panic helper for `Result<T, E>::err_value()` when the result is an Ok
    #[inline]
    #[track_caller]
    pub(crate) fn err_value_failed(value: &dyn fmt::Debug) -> ! {
        panic_at(
            "called Result::err_value() on an Ok value",
            Some(value),
            SourceLocation::current(),
        )
    }
}
