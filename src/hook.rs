/*
 * hook.rs
 *
 * Process-wide panic hook registry.
 *
 * One atomic pointer, read on every panic, written rarely (usually once at
 * startup). Reads are lock-free loads; replacement is a single atomic swap,
 * so no caller can ever observe a torn or half-installed function pointer.
 *
 * Null encodes "built-in default handler". That sidesteps const-initializing
 * the static with a function pointer cast and gives set_hook a natural
 * "previous was the default" marker to return.
 */

use core::fmt;
use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

use crate::location::SourceLocation;
use crate::report::ReportPayload;

/// Signature every panic handler must satisfy.
///
/// A plain function pointer: `'static`, `Copy`, allocation-free, and safe to
/// call from any thread or interrupt context. The `!` return type makes the
/// never-returns contract a matter for the type checker rather than the
/// documentation - a safe handler *cannot* hand control back to the faulting
/// accessor. (A handler may still unwind; test hooks do exactly that.
/// Production handlers must terminate.)
pub type PanicHook = fn(message: &str, payload: &ReportPayload<'_>, location: SourceLocation) -> !;

/// The active handler as seen by [`set_hook`]/[`current_hook`]: either the
/// built-in default or a user-installed function.
///
/// Returned by [`set_hook`] so callers can nest and later restore:
///
/// ```
/// use failstop::{Hook, ReportPayload, SourceLocation, set_hook};
///
/// fn quiet(msg: &str, payload: &ReportPayload<'_>, loc: SourceLocation) -> ! {
///     failstop::handlers::halt(msg, payload, loc)
/// }
///
/// let previous = set_hook(quiet);
/// assert_eq!(previous, Hook::Default);
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Hook {
    /// The built-in print-and-abort handler.
    Default,
    /// A user-installed handler.
    Custom(PanicHook),
}

/* state: null = default handler, anything else = a PanicHook cast to a
 * raw pointer by set_hook/restore_hook. No other writer exists. */
static HOOK: AtomicPtr<()> = AtomicPtr::new(ptr::null_mut());

impl Hook {
    fn into_raw(self) -> *mut () {
        match self {
            Hook::Default => ptr::null_mut(),
            Hook::Custom(hook) => hook as *mut (),
        }
    }

    fn from_raw(raw: *mut ()) -> Self {
        if raw.is_null() {
            Hook::Default
        } else {
            // SAFETY: every non-null value stored in HOOK was produced by
            // into_raw() from a valid PanicHook function pointer, and fn
            // pointers have no lifetime or validity requirements beyond the
            // process itself. Transmuting it back yields the same pointer.
            Hook::Custom(unsafe { core::mem::transmute::<*mut (), PanicHook>(raw) })
        }
    }
}

impl PartialEq for Hook {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Hook::Default, Hook::Default) => true,
            (Hook::Custom(a), Hook::Custom(b)) => core::ptr::fn_addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for Hook {}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hook::Default => f.write_str("default"),
            Hook::Custom(_) => f.write_str("custom"),
        }
    }
}

/// Install `hook` as the process-wide panic hook and return the previously
/// active one.
///
/// A single atomic publish with release semantics: once `set_hook` returns,
/// any thread that panics observes the new handler (its panic path loads
/// with acquire). Concurrent installs are last-write-wins; each caller gets
/// the handler it displaced, so nesting restores cleanly:
///
/// ```no_run
/// use failstop::{handlers, restore_hook, set_hook};
///
/// let previous = set_hook(handlers::halt);
/// /* ... region where panics must not touch stderr ... */
/// restore_hook(previous);
/// ```
pub fn set_hook(hook: PanicHook) -> Hook {
    Hook::from_raw(HOOK.swap(hook as *mut (), Ordering::AcqRel))
}

/// Reinstall a handler previously returned by [`set_hook`], including the
/// [`Hook::Default`] marker. Returns the handler it displaced.
pub fn restore_hook(hook: Hook) -> Hook {
    Hook::from_raw(HOOK.swap(hook.into_raw(), Ordering::AcqRel))
}

/// The currently active handler. Lock-free; called on every panic.
#[must_use]
pub fn current_hook() -> Hook {
    Hook::from_raw(HOOK.load(Ordering::Acquire))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe_hook(_: &str, _: &ReportPayload<'_>, _: SourceLocation) -> ! {
        unreachable!("never invoked by these tests")
    }

    fn other_hook(_: &str, _: &ReportPayload<'_>, _: SourceLocation) -> ! {
        unreachable!("never invoked by these tests")
    }

    /*
     * the registry is process-global, so the whole install/replace/restore
     * sequence lives in one test fn - parallel test threads must not
     * interleave their swaps.
     */
    #[test]
    fn test_install_replace_restore_sequence() {
        assert_eq!(current_hook(), Hook::Default);

        /* first install displaces the default */
        let prev = set_hook(probe_hook);
        assert_eq!(prev, Hook::Default);
        assert_eq!(current_hook(), Hook::Custom(probe_hook));

        /* second install returns the first handler */
        let prev = set_hook(other_hook);
        assert_eq!(prev, Hook::Custom(probe_hook));
        assert_ne!(prev, Hook::Custom(other_hook));

        /* restoring the default marker round-trips */
        let prev = restore_hook(Hook::Default);
        assert_eq!(prev, Hook::Custom(other_hook));
        assert_eq!(current_hook(), Hook::Default);
    }

    #[test]
    fn test_hook_display() {
        assert_eq!(std::format!("{}", Hook::Default), "default");
        assert_eq!(std::format!("{}", Hook::Custom(probe_hook)), "custom");
    }
}

/* -------------------------------------------------------------------------- */
/*                              kani proofs                                   */
/* -------------------------------------------------------------------------- */

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /*
     * verify the null-is-default encoding: the raw representation of a Hook
     * round-trips through the marker logic. We model the pointer as a
     * nullness flag because Kani cannot enumerate function addresses.
     */
    #[kani::proof]
    fn verify_default_marker_round_trip() {
        let raw: *mut () = core::ptr::null_mut();
        let hook = Hook::from_raw(raw);
        kani::assert(
            matches!(hook, Hook::Default),
            "null raw must decode to the default marker",
        );
        kani::assert(
            hook.into_raw().is_null(),
            "default marker must encode back to null",
        );
    }

    /*
     * verify the publish state machine: a swap observes exactly the value
     * the previous swap stored, never an intermediate. Modeled on plain
     * state - the atomicity of the real swap is the hardware's job.
     */
    #[kani::proof]
    fn verify_swap_returns_displaced_state() {
        let mut published: u8 = 0; /* 0 = default, 1 = hook A, 2 = hook B */

        let displaced = published;
        published = 1;
        kani::assert(displaced == 0, "first install displaces the default");

        let displaced = published;
        published = 2;
        kani::assert(displaced == 1, "second install displaces the first hook");
        kani::assert(published == 2, "last write wins");
    }
}
