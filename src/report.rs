/*
 * report.rs
 *
 * The diagnostic bundle a panic hook receives.
 *
 * Non-owning by construction: everything in here borrows from the faulting
 * call's stack frame. The lifetime parameter is what stops a handler from
 * stashing the payload somewhere and reading it after the frame is gone.
 */

use core::fmt;

use crate::location::SourceLocation;

/// Type-erased diagnostic payload handed to the active panic hook.
///
/// Bundles the panic message, an optional borrow of the offending value
/// (the `Some` rejected by `unwrap_none`, the `Err` rejected by `unwrap`,
/// ...), and the source location of the faulting accessor call.
///
/// The attached value is erased to `&dyn fmt::Debug`: the payload carries a
/// reference plus a formatting capability, never the concrete type, so the
/// value needs neither `Copy` nor `Clone` and the hook needs no knowledge of
/// it. Valid only for the duration of the hook invocation - handlers must
/// render what they want before terminating, not retain the borrow.
#[derive(Clone, Copy)]
pub struct ReportPayload<'a> {
    message: &'a str,
    value: Option<&'a dyn fmt::Debug>,
    location: SourceLocation,
}

impl<'a> ReportPayload<'a> {
    /// Bundle up a report. Called by [`panic_at`](crate::panic_at)
    /// immediately before the hook is invoked.
    #[must_use]
    pub fn new(
        message: &'a str,
        value: Option<&'a dyn fmt::Debug>,
        location: SourceLocation,
    ) -> Self {
        Self {
            message,
            value,
            location,
        }
    }

    /// The panic message (canned or caller-supplied).
    #[must_use]
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// The offending value, if the faulting accessor had one to attach.
    #[must_use]
    pub fn value(&self) -> Option<&'a dyn fmt::Debug> {
        self.value
    }

    /// Where the faulting accessor was called.
    #[must_use]
    pub fn location(&self) -> SourceLocation {
        self.location
    }
}

impl fmt::Debug for ReportPayload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportPayload")
            .field("message", &self.message)
            .field("value", &self.value.map(|_| "<erased>"))
            .field("location", &self.location)
            .finish()
    }
}

impl fmt::Display for ReportPayload<'_> {
    /// Renders `panicked at '<message>', <location>` with the attached
    /// value's Debug form appended when present. This is exactly what the
    /// built-in print handler writes to stderr.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked at '{}', {}", self.message, self.location)?;
        if let Some(value) = self.value {
            write!(f, ": {value:?}")?;
        }
        Ok(())
    }
}
