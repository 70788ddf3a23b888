/*
 * panicking.rs
 *
 * The trigger side of the subsystem: build the payload, look up the hook,
 * cede control. Everything here is #[track_caller] so the location that
 * reaches the hook is the user's accessor call, not ours.
 *
 * All paths end in a call to a fn(...) -> !; the compiler enforces that no
 * code after a panic call is reachable.
 */

use core::fmt;

use crate::handlers;
use crate::hook::{self, Hook};
use crate::location::SourceLocation;
use crate::report::ReportPayload;

/// Raise a panic with `message`, routing through the active hook.
///
/// Never returns. The location is captured at the call site via
/// `#[track_caller]`.
///
/// ```no_run
/// failstop::panic("subsystem entered an impossible state");
/// ```
#[track_caller]
#[inline]
pub fn panic(message: &str) -> ! {
    panic_at(message, None, SourceLocation::current())
}

/// Raise a panic with `message` and the offending `value` attached.
///
/// The value is borrowed for the duration of the hook call only; it is
/// type-erased to its `Debug` capability, so it need not be `Copy`, `Clone`,
/// or even nameable at the hook.
#[track_caller]
#[inline]
pub fn panic_with(message: &str, value: &dyn fmt::Debug) -> ! {
    panic_at(message, Some(value), SourceLocation::current())
}

/// Raise a panic with an explicitly supplied location.
///
/// This is the common funnel: builds the [`ReportPayload`] and invokes the
/// current hook. Use it directly when forwarding a location captured
/// somewhere else; [`panic()`] and [`panic_with`] capture for you.
pub fn panic_at(message: &str, value: Option<&dyn fmt::Debug>, location: SourceLocation) -> ! {
    let payload = ReportPayload::new(message, value, location);
    match hook::current_hook() {
        Hook::Custom(hook) => hook(message, &payload, location),
        Hook::Default => handlers::print(message, &payload, location),
    }
}
