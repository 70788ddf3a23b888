/*
 * location.rs
 *
 * Call-site capture for panic diagnostics.
 *
 * `#[track_caller]` gives us the default-argument trick for free: every
 * forwarding frame between the user's accessor call and the hook carries
 * the attribute, so `current()` always reports the user's line, never ours.
 *
 * Rust's core::panic::Location has no function name. `function` is therefore
 * optional; the location!() macro fills it in at sites that want it.
 */

use core::fmt;

/// Where a panic was triggered: file, line, column, and (when captured via
/// [`location!`](crate::location!)) the enclosing function.
///
/// Always references `'static` compile-time string storage and is copied by
/// value - no ownership concerns anywhere on the panic path.
///
/// # Examples
///
/// ```
/// use failstop::SourceLocation;
///
/// let loc = SourceLocation::current();
/// assert_eq!(loc.file(), file!());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
    column: u32,
    function: Option<&'static str>,
}

impl SourceLocation {
    /// Build a location from explicit parts.
    ///
    /// Only needed when forwarding a location that was captured somewhere
    /// else entirely (e.g. deserialized crash reports). Normal callers use
    /// [`current`](Self::current) and let `#[track_caller]` do the work.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self {
            file,
            line,
            column,
            function: None,
        }
    }

    /// Capture the caller's location.
    ///
    /// Because this function is `#[track_caller]`, the captured position is
    /// the *call site of the nearest non-`#[track_caller]` frame* - exactly
    /// the user code that invoked the failing accessor, no matter how many
    /// forwarding helpers sit in between.
    #[must_use]
    #[track_caller]
    #[inline]
    pub fn current() -> Self {
        let caller = core::panic::Location::caller();
        Self {
            file: caller.file(),
            line: caller.line(),
            column: caller.column(),
            function: None,
        }
    }

    /// Attach a function name to this location.
    #[must_use]
    pub const fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }

    /// Source file path as embedded by the compiler.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// 1-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column number.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Enclosing function name, if captured.
    #[must_use]
    pub const fn function(&self) -> Option<&'static str> {
        self.function
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            Some(function) => write!(
                f,
                "{}:{}:{} in {}",
                self.file, self.line, self.column, function
            ),
            None => write!(f, "{}:{}:{}", self.file, self.line, self.column),
        }
    }
}

/// Capture the current location *including the enclosing function name*.
///
/// `core::panic::Location` does not expose the function, so this macro
/// recovers it from the type name of a local item. Use it where the richer
/// `"file:line:column in function"` rendering matters; plain
/// [`SourceLocation::current`] is enough for the panic helpers themselves.
///
/// # Examples
///
/// ```
/// fn lift_off() -> failstop::SourceLocation {
///     failstop::location!()
/// }
///
/// assert!(lift_off().function().unwrap().ends_with("lift_off"));
/// ```
#[macro_export]
macro_rules! location {
    () => {{
        fn anchor() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(anchor);
        /* strip the trailing "::anchor" to get the enclosing function path */
        let name = &name[..name.len() - "::anchor".len()];
        $crate::SourceLocation::current().with_function(name)
    }};
}
