//! # credit_check
//!
//! Luhn checksum validation and card network classification for numeric
//! card numbers.
//!
//! A card number is read as one positive integer (no separators, at most
//! 19 digits), validated with the Luhn algorithm, and classified as Visa,
//! American Express, or Mastercard from its digit count and leading
//! digits. Anything else is invalid.
//!
//! ## Quick Start
//!
//! ```rust
//! use credit_check::{check, report, CardNumber, Network};
//!
//! // Parse and classify a card number
//! let number: CardNumber = "4003600000000014".parse().unwrap();
//! assert_eq!(check(&number), Some(Network::Visa));
//! assert_eq!(report(&number), "VISA");
//!
//! // A failed checksum is invalid regardless of shape
//! let number = CardNumber::new(4003600000000015).unwrap();
//! assert_eq!(check(&number), None);
//! assert_eq!(report(&number), "INVALID");
//! ```
//!
//! ## Checksum Only
//!
//! ```rust
//! use credit_check::luhn;
//!
//! assert!(luhn::is_valid(5555555555554444));
//! assert!(!luhn::is_valid(5555555555554445));
//!
//! // Derive the digit that completes a partial number
//! assert_eq!(luhn::check_digit(400360000000001), 4);
//! ```
//!
//! ## Interactive Input
//!
//! ```rust
//! use std::io::Cursor;
//! use credit_check::prompt::read_card_number;
//!
//! // Re-prompts until a positive number parses, like the CLI does on stdin
//! let input = Cursor::new("abc\n-5\n378282246310005\n");
//! let number = read_card_number(input, Vec::new()).unwrap();
//! assert_eq!(number.value(), 378282246310005);
//! ```
//!
//! ## Test Numbers
//!
//! ```rust
//! use credit_check::{generate, report, Network};
//!
//! // Deterministic, no randomness
//! let number = generate::test_number(Network::Mastercard);
//! assert_eq!(report(&number), "MASTERCARD");
//! ```
//!
//! ## Supported Networks
//!
//! | Network | Leading digits | Length |
//! |---------|----------------|--------|
//! | Visa | 4 | 13, 16 |
//! | American Express | 34, 37 | 15 |
//! | Mastercard | 51-55 | 16 |
//!
//! ## Security
//!
//! - Card numbers live in a single `u64`, zeroized when dropped
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod check;
pub mod classify;
pub mod error;
pub mod generate;
pub mod luhn;
pub mod number;
pub mod prompt;

// Re-export main types at crate root
pub use check::{check, report};
pub use classify::{classify, Network};
pub use error::ParseError;
pub use number::{CardNumber, MAX_CARD_DIGITS};
