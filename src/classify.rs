//! Card network classification from digit count and leading digits.
//!
//! Networks are identified by the issuer conventions for number length and
//! the first one or two digits. Only the three classic networks are
//! supported; everything else classifies as no network at all.

use std::fmt;

/// Supported card networks.
///
/// A closed set: numbers outside these three networks are reported as
/// invalid rather than mapped to a catch-all variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Visa - first digit 4, lengths 13 or 16
    Visa,
    /// American Express - leading digits 34 or 37, length 15
    Amex,
    /// Mastercard - leading digits 51-55, length 16
    Mastercard,
}

impl Network {
    /// Returns the uppercase output token for this network.
    ///
    /// This is the exact text the program prints.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Visa => "VISA",
            Self::Amex => "AMEX",
            Self::Mastercard => "MASTERCARD",
        }
    }

    /// Returns a human-readable name for the network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Amex => "American Express",
            Self::Mastercard => "Mastercard",
        }
    }

    /// Returns the valid digit counts for this network.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u32] {
        match self {
            Self::Visa => &[13, 16],
            Self::Amex => &[15],
            Self::Mastercard => &[16],
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies a card number shape into a network.
///
/// # Arguments
///
/// * `length` - The number of decimal digits.
/// * `leading_two` - The first one or two digits, as produced by
///   [`crate::number::leading_two`].
///
/// # Returns
///
/// `Some(Network)` when the shape matches an issuer convention, `None`
/// otherwise. Rules are evaluated in order, first match wins.
///
/// The Visa rule only inspects the first digit (`leading_two / 10`); Amex
/// and Mastercard match on the full two-digit prefix. That asymmetry
/// follows the real issuer ranges and is load-bearing: a 16-digit number
/// starting 41 is Visa, but 16 digits starting 51 is Mastercard only
/// because the second digit is in range.
///
/// # Example
///
/// ```
/// use credit_check::{classify, Network};
///
/// assert_eq!(classify(16, 40), Some(Network::Visa));
/// assert_eq!(classify(15, 37), Some(Network::Amex));
/// assert_eq!(classify(16, 55), Some(Network::Mastercard));
/// assert_eq!(classify(14, 40), None);
/// ```
#[inline]
pub const fn classify(length: u32, leading_two: u8) -> Option<Network> {
    match (length, leading_two) {
        // 40..=49 is "first digit 4" for any two-digit prefix.
        (13 | 16, 40..=49) => Some(Network::Visa),
        (15, 34 | 37) => Some(Network::Amex),
        (16, 51..=55) => Some(Network::Mastercard),
        _ => None,
    }
}
