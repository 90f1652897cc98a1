//! Fuzz target for the Luhn checksum.
//!
//! Tests that the checksum functions never panic on any integer.

#![no_main]

use libfuzzer_sys::fuzz_target;

use credit_check::luhn;

fuzz_target!(|value: u64| {
    let _ = luhn::is_valid(value);
    let _ = luhn::checksum(value);

    // The check digit must always complete its partial.
    if value <= u64::MAX / 10 {
        let digit = luhn::check_digit(value);
        assert!(digit < 10);
        assert!(luhn::is_valid(value * 10 + digit as u64));
    }
});
