/*
 * probe.rs
 *
 * Scenario driver for the integration tests. argv[1] picks one invalid
 * access; the process is expected to die (or spin, for "halt") through the
 * active hook. Markers go to stderr because abort() gives buffered stdout
 * no chance to flush.
 *
 * Not a user-facing tool. Keep scenarios one-liner obvious.
 */

use failstop::Option::{self, None as NoneOf, Some as SomeOf};
use failstop::Result::{self, Err as ErrOf, Ok as OkOf};
use failstop::{Hook, ReportPayload, SourceLocation, handlers, set_hook};

/// Custom hook for the routing test: prints proof of arrival, then exits
/// with a recognizable status instead of aborting.
fn announcing_hook(message: &str, payload: &ReportPayload<'_>, location: SourceLocation) -> ! {
    eprintln!("custom hook: {message}");
    if let Some(value) = payload.value() {
        eprintln!("custom value: {value:?}");
    }
    eprintln!("custom location: {location}");
    std::process::exit(7)
}

fn main() {
    let scenario = std::env::args().nth(1).unwrap_or_default();

    match scenario.as_str() {
        /* happy paths only - must exit 0 without touching the hook */
        "ok" => {
            let o: Option<i32> = SomeOf(1);
            let r: Result<i32, &str> = OkOf(2);
            assert_eq!(o.unwrap() + r.unwrap(), 3);
            std::process::exit(0);
        }

        "option-unwrap" => {
            let o: Option<i32> = NoneOf;
            /* the marker names the line of the accessor call right below it */
            eprintln!("expect-line:{}", line!() + 1);
            o.unwrap();
        }
        "option-value" => {
            let o: Option<i32> = NoneOf;
            o.value();
        }
        "option-expect" => {
            let o: Option<i32> = NoneOf;
            o.expect("probe expected a value");
        }
        "option-unwrap-none" => {
            let o: Option<i32> = SomeOf(41);
            o.unwrap_none();
        }
        "option-expect-none" => {
            let o: Option<i32> = SomeOf(41);
            o.expect_none("probe expected no value");
        }

        "result-unwrap" => {
            let r: Result<i32, String> = ErrOf(String::from("x"));
            r.unwrap();
        }
        "result-value" => {
            let r: Result<i32, String> = ErrOf(String::from("x"));
            r.value();
        }
        "result-expect" => {
            let r: Result<i32, String> = ErrOf(String::from("x"));
            r.expect("boom");
        }
        "result-unwrap-err" => {
            let r: Result<i32, String> = OkOf(41);
            r.unwrap_err();
        }
        "result-err-value" => {
            let r: Result<i32, String> = OkOf(41);
            r.err_value();
        }
        "result-expect-err" => {
            let r: Result<i32, String> = OkOf(41);
            r.expect_err("probe expected an error");
        }

        /* direct trigger API, bypassing the containers */
        "direct-panic" => {
            failstop::panic("direct trigger");
        }
        "direct-panic-with" => {
            let culprit = [1u8, 2, 3];
            failstop::panic_with("direct trigger with value", &culprit);
        }

        /* hook policies */
        "custom-hook" => {
            let previous = set_hook(announcing_hook);
            eprintln!("previous={}", previous);
            assert_eq!(previous, Hook::Default);
            let o: Option<i32> = NoneOf;
            o.unwrap();
        }
        "halt" => {
            set_hook(handlers::halt);
            eprintln!("halting");
            let o: Option<i32> = NoneOf;
            o.unwrap();
        }
        "abort-hook" => {
            set_hook(handlers::abort);
            let o: Option<i32> = NoneOf;
            o.unwrap();
        }

        other => {
            eprintln!("unknown scenario: {other:?}");
            std::process::exit(2);
        }
    }

    /* every scenario above either exits or panics through the hook */
    unreachable!("scenario fell through without terminating");
}
