/*
 * io.rs
 *
 * no_std stderr output for the print handler.
 * direct writes via libc::write - no buffering, no allocation.
 *
 * a panic report is one short burst of text; a syscall per fmt fragment
 * is fine, and there is nothing to flush when the process aborts.
 */

use core::fmt;

/* stderr file descriptor */
const STDERR: i32 = 2;

/// Write bytes to stderr. Best effort: a failed write on a dying process
/// is not worth reacting to.
#[inline]
pub(crate) fn write_stderr(s: &[u8]) {
    // SAFETY: s is a valid byte slice (ptr + len from a Rust slice), STDERR
    // is always open. write() has no other preconditions; a short or failed
    // write is ignored by design.
    unsafe {
        libc::write(STDERR, s.as_ptr().cast(), s.len());
    }
}

/// A writer that outputs to stderr via direct syscall.
/// Implements core::fmt::Write for use with write!/writeln! macros.
pub(crate) struct StderrWriter;

impl fmt::Write for StderrWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_stderr(s.as_bytes());
        Ok(())
    }
}
