/*
 * option.rs
 *
 * Optional-value container whose invalid accesses terminate through the
 * panic hook instead of unwinding. The deliberate shadowing of
 * core::option::Option is the point: same shape, different failure contract.
 *
 * No state transitions in place - an Option is replaced wholesale by
 * assignment or move, never flipped between Some and None behind a borrow.
 */

use core::fmt;

use crate::helpers;

/// An optional value with fail-stop invalid-access semantics.
///
/// In the `Some` state it exclusively owns its `T`. Accessors that require
/// a state the container is not in do not return an error - they route
/// through the active panic hook and never return.
///
/// # Examples
///
/// ```
/// use failstop::Option::{self, None, Some};
///
/// let present: Option<u32> = Some(3);
/// assert_eq!(present.unwrap(), 3);
///
/// let absent: Option<u32> = None;
/// assert!(absent.is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Option<T> {
    /// A value is present.
    Some(T),
    /// No value.
    None,
}

use self::Option::{None, Some};

impl<T> Option<T> {
    /// `true` if a value is present.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Some(_))
    }

    /// `true` if no value is present.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, None)
    }

    /// Borrowing view of the container: `Option<&T>` in the same state.
    #[must_use]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Some(value) => Some(value),
            None => None,
        }
    }

    /// Move the value out, panicking with `message` if there is none.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Some(value) => value,
            None => helpers::option::expect_failed(message),
        }
    }

    /// Move the value out.
    ///
    /// Panics with `"called Option::unwrap() on a None value"` when empty.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Some(value) => value,
            None => helpers::option::unwrap_failed(),
        }
    }

    /// Borrow the contained value without moving it out.
    ///
    /// Panics with `"called Option::value() on a None value"` when empty.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Some(value) => value,
            None => helpers::option::value_failed(),
        }
    }
}

/*
 * the None-asserting accessors attach the unexpected value to the report,
 * so they need T: Debug - bounded on the method, not the type.
 */
impl<T: fmt::Debug> Option<T> {
    /// Assert the container is empty, panicking with `message` (and the
    /// unexpected value attached to the report) if it is not.
    #[track_caller]
    pub fn expect_none(self, message: &str) {
        if let Some(value) = self {
            helpers::option::expect_none_failed(message, &value)
        }
    }

    /// Assert the container is empty.
    ///
    /// Panics with `"called Option::unwrap_none() on a Some value"`, the
    /// held value attached, if a value is present.
    #[track_caller]
    pub fn unwrap_none(self) {
        if let Some(value) = self {
            helpers::option::unwrap_none_failed(&value)
        }
    }
}

/* bridges to and from the core type, for interop at crate boundaries */

impl<T> From<core::option::Option<T>> for Option<T> {
    fn from(value: core::option::Option<T>) -> Self {
        match value {
            core::option::Option::Some(value) => Some(value),
            core::option::Option::None => None,
        }
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => core::option::Option::Some(value),
            None => core::option::Option::None,
        }
    }
}

impl<T> Default for Option<T> {
    /// The empty state.
    fn default() -> Self {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_queries() {
        let present: Option<u8> = Some(1);
        let absent: Option<u8> = None;
        assert!(present.is_some() && !present.is_none());
        assert!(absent.is_none() && !absent.is_some());
    }

    #[test]
    fn test_unwrap_moves_ownership_out() {
        /* non-Copy payload: unwrap must move, not copy */
        let o: Option<std::string::String> = Some(std::string::String::from("owned"));
        assert_eq!(o.unwrap(), "owned");
    }

    #[test]
    fn test_expect_on_some_returns_value() {
        let o: Option<u32> = Some(7);
        assert_eq!(o.expect("should be present"), 7);
    }

    #[test]
    fn test_value_borrows_without_moving() {
        let o: Option<u32> = Some(9);
        assert_eq!(*o.value(), 9);
        /* still usable afterwards - value() only borrowed */
        assert_eq!(o.unwrap(), 9);
    }

    #[test]
    fn test_none_accessors_pass_on_none() {
        let o: Option<u32> = None;
        o.unwrap_none();
        let o: Option<u32> = None;
        o.expect_none("should be empty");
    }

    #[test]
    fn test_as_ref_preserves_state() {
        let o: Option<u32> = Some(5);
        assert_eq!(o.as_ref(), Some(&5));
        let o: Option<u32> = None;
        assert!(o.as_ref().is_none());
    }

    #[test]
    fn test_core_bridges_round_trip() {
        let ours: Option<u32> = core::option::Option::Some(4).into();
        assert_eq!(ours, Some(4));
        let theirs: core::option::Option<u32> = ours.into();
        assert_eq!(theirs, core::option::Option::Some(4));

        let ours: Option<u32> = core::option::Option::None.into();
        assert!(ours.is_none());
    }

    #[test]
    fn test_default_is_none() {
        assert!(Option::<u8>::default().is_none());
    }
}
