/*
 * lib.rs
 *
 * Library root. The panic path must work with core alone - no alloc, no
 * unwinding machinery - so the whole crate is no_std. Tests pull in std
 * for the harness.
 */

//! # failstop
//!
//! Fail-fast [`Option`] and [`Result`] containers for environments where
//! unwinding is unavailable, undesired, or too costly: embedded targets,
//! real-time code, `panic = "abort"` builds.
//!
//! An invalid access (e.g. `unwrap()` on a `None`) does not unwind. It
//! builds a borrow-only diagnostic report - message, optional offending
//! value, precise caller location - and hands control to the process-wide
//! panic hook, which never returns. The hook is a lock-free swappable
//! function pointer; three policies ship in [`handlers`] and the default
//! prints the report to stderr and aborts.
//!
//! ## Quick Start
//!
//! ```
//! use failstop::Result::{self, Err, Ok};
//!
//! fn parse_header(raw: u8) -> Result<u8, &'static str> {
//!     if raw & 0x80 == 0 { Ok(raw) } else { Err("reserved bit set") }
//! }
//!
//! assert_eq!(parse_header(0x07).unwrap(), 0x07);
//! assert!(parse_header(0xff).is_err());
//! ```
//!
//! Installing a policy:
//!
//! ```no_run
//! /* spin instead of writing to stderr - e.g. inside an interrupt handler */
//! let previous = failstop::set_hook(failstop::handlers::halt);
//! # let _ = previous;
//! ```

#![no_std]

/* tests use std's harness, allocator, and catch_unwind */
#[cfg(test)]
extern crate std;

pub mod handlers;
mod helpers;
pub mod hook;
mod io;
pub mod location;
pub mod option;
pub mod panicking;
pub mod report;
pub mod result;

pub use hook::{Hook, PanicHook, current_hook, restore_hook, set_hook};
pub use location::SourceLocation;
pub use option::Option;
pub use panicking::{panic, panic_at, panic_with};
pub use report::ReportPayload;
pub use result::Result;
