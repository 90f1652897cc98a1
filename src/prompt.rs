//! Interactive card number acquisition.
//!
//! One prompt, one line, retry until the line parses as a positive card
//! number. Rejected input produces no diagnostic, only another prompt,
//! matching classic interactive number readers.

use std::io::{self, BufRead, Write};

use crate::number::CardNumber;

/// The prompt written before each read, without a trailing newline.
pub const PROMPT: &str = "Number: ";

/// Reads a card number, re-prompting until one parses.
///
/// Writes [`PROMPT`] to `output`, reads a line from `input`, and parses it
/// as a [`CardNumber`]. Any [`crate::ParseError`] (empty line, garbage,
/// zero, negative, too many digits) silently restarts the loop. The loop
/// is unbounded: only a valid number or an I/O failure ends it.
///
/// # Errors
///
/// Propagates I/O errors from the reader or writer. End of input before a
/// valid number is reported as [`io::ErrorKind::UnexpectedEof`], since the
/// retry loop can never finish without another line.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use credit_check::prompt::read_card_number;
///
/// let input = Cursor::new("-5\n0\n4003600000000014\n");
/// let mut prompts = Vec::new();
/// let number = read_card_number(input, &mut prompts).unwrap();
///
/// assert_eq!(number.value(), 4003600000000014);
/// // One prompt per attempt, nothing else.
/// assert_eq!(prompts, b"Number: Number: Number: ");
/// ```
pub fn read_card_number<R, W>(mut input: R, mut output: W) -> io::Result<CardNumber>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a card number was entered",
            ));
        }

        if let Ok(number) = line.trim().parse::<CardNumber>() {
            return Ok(number);
        }
    }
}
