/*
 * proptest.rs
 *
 * property-based tests for the non-panicking surface: valid accesses always
 * return the stored value unchanged, bridges round-trip, and diagnostic
 * rendering always contains what it claims to carry.
 */

use proptest::prelude::*;

use failstop::Option::Some as SomeOf;
use failstop::Result::{Err as ErrOf, Ok as OkOf};
use failstop::{ReportPayload, SourceLocation};

/* ============================================================================
 * Container Round-Trip Properties
 * ============================================================================ */

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn option_some_unwrap_returns_stored(v in any::<i64>()) {
        prop_assert_eq!(SomeOf(v).unwrap(), v);
    }

    #[test]
    fn option_some_value_borrows_stored(v in any::<i64>()) {
        let o = SomeOf(v);
        prop_assert_eq!(*o.value(), v);
        /* borrowing accessor leaves the container usable */
        prop_assert_eq!(o.expect("still there"), v);
    }

    #[test]
    fn result_ok_unwrap_returns_stored(v in any::<i64>()) {
        let r: failstop::Result<i64, String> = OkOf(v);
        prop_assert_eq!(r.unwrap(), v);
    }

    #[test]
    fn result_err_unwrap_err_returns_stored(e in ".*") {
        let r: failstop::Result<i64, String> = ErrOf(e.clone());
        prop_assert_eq!(r.unwrap_err(), e);
    }

    #[test]
    fn result_err_value_borrows_stored(e in ".*") {
        let r: failstop::Result<i64, String> = ErrOf(e.clone());
        prop_assert_eq!(r.err_value(), &e);
    }

    #[test]
    fn option_core_bridge_round_trips(v in proptest::option::of(any::<u32>())) {
        let ours: failstop::Option<u32> = v.into();
        prop_assert_eq!(ours.is_some(), v.is_some());
        let back: Option<u32> = ours.into();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn result_core_bridge_round_trips(v in proptest::result::maybe_err(any::<u32>(), ".*")) {
        let ours: failstop::Result<u32, String> = v.clone().into();
        prop_assert_eq!(ours.is_ok(), v.is_ok());
        let back: Result<u32, String> = ours.into();
        prop_assert_eq!(back, v);
    }
}

/* ============================================================================
 * Diagnostic Rendering Properties
 * ============================================================================ */

proptest! {
    #[test]
    fn location_display_cites_line_and_column(line in 1u32..100_000, column in 1u32..500) {
        let loc = SourceLocation::new("src/probe_point.rs", line, column);
        let shown = format!("{loc}");
        prop_assert!(shown.starts_with("src/probe_point.rs:"));
        let line_part = format!(":{line}:");
        let column_part = format!(":{column}");
        prop_assert!(shown.contains(&line_part));
        prop_assert!(shown.ends_with(&column_part));
    }

    #[test]
    fn payload_display_contains_message_and_value(msg in "[a-zA-Z0-9 ]{1,40}", v in any::<i32>()) {
        let loc = SourceLocation::new("f.rs", 1, 1);
        let payload = ReportPayload::new(&msg, Some(&v), loc);
        let shown = format!("{payload}");
        prop_assert!(shown.contains(&msg));
        let value_part = format!("{v}");
        prop_assert!(shown.contains(&value_part));
    }

    #[test]
    fn payload_accessors_preserve_inputs(msg in "[ -~]{0,60}", line in 1u32..10_000) {
        let loc = SourceLocation::new("f.rs", line, 1);
        let payload = ReportPayload::new(&msg, None, loc);
        prop_assert_eq!(payload.message(), msg.as_str());
        prop_assert_eq!(payload.location().line(), line);
        prop_assert!(payload.value().is_none());
    }
}
