//! Fuzz target for card number parsing and checking.
//!
//! Tests that the string entry points never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;

use credit_check::{check, report, CardNumber};

fuzz_target!(|data: &str| {
    // Parsing must never panic.
    let parsed = data.parse::<CardNumber>();

    // Anything that parses must survive the whole pipeline and hold the
    // constructor invariants.
    if let Ok(number) = parsed {
        assert!(number.value() > 0);
        assert!(number.digit_count() <= 19);

        let _ = check(&number);
        let verdict = report(&number);
        assert!(matches!(
            verdict,
            "VISA" | "AMEX" | "MASTERCARD" | "INVALID"
        ));
    }
});
