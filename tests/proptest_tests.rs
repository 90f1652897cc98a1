//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use proptest::prelude::*;

use credit_check::{
    check, classify, generate, luhn,
    number::{digit_count, leading_two},
    report, CardNumber, Network, MAX_CARD_DIGITS,
};

/// Any value a CardNumber can hold: positive, at most 19 digits.
fn card_value() -> impl Strategy<Value = u64> {
    1u64..=9_999_999_999_999_999_999
}

fn any_network() -> impl Strategy<Value = Network> {
    prop_oneof![
        Just(Network::Visa),
        Just(Network::Amex),
        Just(Network::Mastercard),
    ]
}

// =============================================================================
// LUHN PROPERTIES
// =============================================================================

proptest! {
    /// Property: appending the generated check digit makes any partial valid.
    #[test]
    fn check_digit_makes_valid(partial in 1u64..=999_999_999_999_999_999) {
        let digit = luhn::check_digit(partial);
        prop_assert!(digit < 10);
        prop_assert!(luhn::is_valid(partial * 10 + digit as u64));
    }

    /// Property: exactly one of the ten final digits passes the checksum.
    #[test]
    fn exactly_one_check_digit_works(partial in 1u64..=999_999_999_999_999_999) {
        let valid_endings = (0..10u64)
            .filter(|d| luhn::is_valid(partial * 10 + d))
            .count();
        prop_assert_eq!(valid_endings, 1);
    }

    /// Property: changing any single digit invalidates a valid number.
    #[test]
    fn single_digit_change_invalidates(
        network in any_network(),
        position in 0u32..16,
        delta in 1u64..=9,
    ) {
        let value = generate::test_number(network).value();
        let length = digit_count(value);
        prop_assume!(position < length);

        let place = 10u64.pow(position);
        let old_digit = (value / place) % 10;
        let new_digit = (old_digit + delta) % 10;
        let changed = value - old_digit * place + new_digit * place;

        prop_assert!(luhn::is_valid(value));
        prop_assert!(
            !luhn::is_valid(changed),
            "changing digit {} of {} to {} should break the checksum",
            position, value, new_digit
        );
    }

    /// Property: the checksum never panics anywhere in the supported range.
    #[test]
    fn checksum_total_on_all_values(value in any::<u64>()) {
        let _ = luhn::is_valid(value);
        let _ = luhn::checksum(value);
    }
}

// =============================================================================
// DIGIT EXTRACTOR PROPERTIES
// =============================================================================

proptest! {
    /// Property: digit_count matches the decimal rendering length.
    #[test]
    fn digit_count_matches_rendering(value in 1u64..) {
        prop_assert_eq!(digit_count(value) as usize, value.to_string().len());
    }

    /// Property: leading_two is the one- or two-digit decimal prefix.
    #[test]
    fn leading_two_matches_rendering(value in any::<u64>()) {
        let two = leading_two(value);
        prop_assert!(two <= 99);

        let rendered = value.to_string();
        let prefix: u64 = rendered[..rendered.len().min(2)].parse().unwrap();
        prop_assert_eq!(two as u64, prefix);
    }

    /// Property: the extractors are pure.
    #[test]
    fn extractors_are_idempotent(value in card_value()) {
        prop_assert_eq!(digit_count(value), digit_count(value));
        prop_assert_eq!(leading_two(value), leading_two(value));
    }
}

// =============================================================================
// PARSING PROPERTIES
// =============================================================================

proptest! {
    /// Property: every in-range value round-trips through its string form.
    #[test]
    fn parse_roundtrip(value in card_value()) {
        let parsed: CardNumber = value.to_string().parse().unwrap();
        prop_assert_eq!(parsed.value(), value);
    }

    /// Property: CardNumber construction agrees with the stated bounds.
    #[test]
    fn construction_respects_bounds(value in any::<u64>()) {
        let result = CardNumber::new(value);
        if value == 0 || digit_count(value) as usize > MAX_CARD_DIGITS {
            prop_assert!(result.is_err());
        } else {
            prop_assert!(result.is_ok());
        }
    }

    /// Property: parsing never panics on arbitrary input.
    #[test]
    fn parse_never_panics(input in ".*") {
        let _ = input.parse::<CardNumber>();
    }

    /// Property: anything that parses is positive and within the digit cap.
    #[test]
    fn parsed_numbers_hold_the_invariants(input in ".*") {
        if let Ok(number) = input.parse::<CardNumber>() {
            prop_assert!(number.value() > 0);
            prop_assert!(number.digit_count() as usize <= MAX_CARD_DIGITS);
        }
    }
}

// =============================================================================
// CLASSIFICATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: generated numbers classify back to their own network.
    #[test]
    fn generated_numbers_classify_home(network in any_network()) {
        let number = generate::test_number(network);
        prop_assert_eq!(check(&number), Some(network));
    }

    /// Property: the verdict is always one of the four labels.
    #[test]
    fn report_is_closed(value in card_value()) {
        let number = CardNumber::new(value).unwrap();
        let verdict = report(&number);
        prop_assert!(
            matches!(verdict, "VISA" | "AMEX" | "MASTERCARD" | "INVALID"),
            "unexpected verdict {}",
            verdict
        );
    }

    /// Property: a checksum failure is INVALID regardless of shape.
    #[test]
    fn checksum_failure_is_always_invalid(value in card_value()) {
        prop_assume!(!luhn::is_valid(value));
        let number = CardNumber::new(value).unwrap();
        prop_assert_eq!(report(&number), "INVALID");
    }

    /// Property: classify is total over its whole domain.
    #[test]
    fn classify_total(length in 0u32..=40, leading in 0u8..=99) {
        let result = classify(length, leading);
        if let Some(network) = result {
            prop_assert!(network.valid_lengths().contains(&length));
        }
    }

    /// Property: only first-digit 4 can ever be Visa.
    #[test]
    fn visa_requires_leading_four(length in 0u32..=40, leading in 0u8..=99) {
        if classify(length, leading) == Some(Network::Visa) {
            prop_assert_eq!(leading / 10, 4);
            prop_assert!(length == 13 || length == 16);
        }
    }
}
