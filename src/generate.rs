//! Deterministic test card numbers.
//!
//! Builds numbers that pass both the checksum and the classifier, without
//! any randomness: network prefix, zero filler, Luhn check digit. The
//! results are mathematically valid but attached to no real account.
//!
//! # Example
//!
//! ```
//! use credit_check::{check, generate, Network};
//!
//! let number = generate::test_number(Network::Amex);
//! assert_eq!(check(&number), Some(Network::Amex));
//! ```

use crate::classify::Network;
use crate::luhn;
use crate::number::{digit_count, CardNumber};

/// Two-digit prefix used for each network.
///
/// Visa only requires the first digit to be 4; 40 keeps the construction
/// uniform across networks.
const fn prefix(network: Network) -> u64 {
    match network {
        Network::Visa => 40,
        Network::Amex => 34,
        Network::Mastercard => 51,
    }
}

/// Generates a test number for `network` at its default length.
///
/// Visa and Mastercard produce 16 digits, Amex 15.
pub fn test_number(network: Network) -> CardNumber {
    let length = match network {
        Network::Amex => 15,
        Network::Visa | Network::Mastercard => 16,
    };
    // Default lengths are always in valid_lengths().
    test_number_with_length(network, length).expect("default length is valid")
}

/// Generates a test number for `network` with an explicit digit count.
///
/// Returns `None` when `length` is not one of the network's
/// [`Network::valid_lengths`], so every produced number classifies back to
/// its own network.
///
/// # Example
///
/// ```
/// use credit_check::{generate, report, Network};
///
/// // The 13-digit Visa form.
/// let number = generate::test_number_with_length(Network::Visa, 13).unwrap();
/// assert_eq!(number.digit_count(), 13);
/// assert_eq!(report(&number), "VISA");
///
/// // Amex is never 16 digits.
/// assert!(generate::test_number_with_length(Network::Amex, 16).is_none());
/// ```
pub fn test_number_with_length(network: Network, length: u32) -> Option<CardNumber> {
    if !network.valid_lengths().contains(&length) {
        return None;
    }

    // Prefix, then zeros out to one digit short of the target length.
    let mut partial = prefix(network);
    while digit_count(partial) < length - 1 {
        partial *= 10;
    }

    let full = partial * 10 + luhn::check_digit(partial) as u64;
    // Positive by construction, length capped at 19 by valid_lengths().
    Some(CardNumber::new(full).expect("generated number is in range"))
}
