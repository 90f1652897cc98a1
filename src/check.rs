//! Full card number checking: checksum first, then classification.

use crate::classify::{classify, Network};
use crate::luhn;
use crate::number::CardNumber;

/// Checks a card number and returns its issuing network.
///
/// The checksum gates everything: a number that fails Luhn validation is
/// `None` no matter how Visa-shaped it looks. A number that passes is then
/// classified by digit count and leading digits.
///
/// # Example
///
/// ```
/// use credit_check::{check, CardNumber, Network};
///
/// let number = CardNumber::new(4003600000000014).unwrap();
/// assert_eq!(check(&number), Some(Network::Visa));
///
/// // Passes no checksum: last digit off by one.
/// let number = CardNumber::new(4003600000000015).unwrap();
/// assert_eq!(check(&number), None);
/// ```
#[inline]
pub fn check(number: &CardNumber) -> Option<Network> {
    if !luhn::is_valid(number.value()) {
        return None;
    }
    classify(number.digit_count(), number.leading_two())
}

/// Checks a card number and returns the printable verdict.
///
/// One of `"VISA"`, `"AMEX"`, `"MASTERCARD"`, or `"INVALID"`: exactly the
/// line the CLI prints.
///
/// # Example
///
/// ```
/// use credit_check::{report, CardNumber};
///
/// let number = CardNumber::new(378282246310005).unwrap();
/// assert_eq!(report(&number), "AMEX");
/// ```
#[inline]
pub fn report(number: &CardNumber) -> &'static str {
    match check(number) {
        Some(network) => network.label(),
        None => "INVALID",
    }
}
