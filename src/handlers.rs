/*
 * handlers.rs
 *
 * Built-in panic policies. Each is a plain fn matching PanicHook, so any of
 * them can be passed to set_hook directly. Exactly one is active at a time;
 * `print` is what runs when nobody installed anything.
 */

use core::fmt::Write;

use crate::hook::PanicHook;
use crate::io::StderrWriter;
use crate::location::SourceLocation;
use crate::report::ReportPayload;

/// Halt the faulting thread by spinning forever.
///
/// Deliberately performs no I/O and touches no shared state, so it is safe
/// to install in restricted contexts (interrupt handlers, allocator-failure
/// paths). Intended for environments where a debugger or watchdog intervenes
/// externally; nothing inside the process will.
pub fn halt(_message: &str, _payload: &ReportPayload<'_>, _location: SourceLocation) -> ! {
    loop {
        core::hint::spin_loop();
    }
}

/// Terminate immediately via `abort(3)`, without any diagnostic output.
///
/// No formatting, no syscall beyond the abort itself. The policy of choice
/// when stderr may be gone or when a core dump is the diagnostic.
pub fn abort(_message: &str, _payload: &ReportPayload<'_>, _location: SourceLocation) -> ! {
    // SAFETY: abort() terminates the process immediately. It has no
    // preconditions and never returns.
    unsafe { libc::abort() }
}

/// Write the full report to stderr, then abort. The default hook.
///
/// Output is `panicked at '<message>', <file>:<line>:<column>` with the
/// attached value's Debug rendering appended when one is present. Each
/// fragment goes out through a direct write(2) - no buffering to lose and
/// no allocation that could itself fail.
pub fn print(message: &str, payload: &ReportPayload<'_>, location: SourceLocation) -> ! {
    /* formatting errors are unreachable for StderrWriter, and there is
     * nothing sensible to do with one while already panicking */
    let _ = writeln!(StderrWriter, "{payload}");
    abort(message, payload, location)
}

/* the built-ins must themselves satisfy the hook contract */
const _: PanicHook = halt;
const _: PanicHook = abort;
const _: PanicHook = print;
