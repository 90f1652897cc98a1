//! CLI for card number checking.
//!
//! # Usage
//!
//! ```bash
//! # Interactive: prompts until a positive number is entered
//! creditcheck
//!
//! # One-shot: classify an argument
//! creditcheck 4003600000000014
//! ```
//!
//! Output is a single line: `VISA`, `AMEX`, `MASTERCARD`, or `INVALID`.

use std::io;
use std::process;

use clap::Parser;
use credit_check::{prompt, report, CardNumber};

#[derive(Parser)]
#[command(name = "creditcheck")]
#[command(version, about = "Validate a credit card number and name its network")]
struct Cli {
    /// Card number to check; prompts on stdin when omitted
    number: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let number = match cli.number {
        Some(raw) => match raw.parse::<CardNumber>() {
            Ok(number) => number,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            match prompt::read_card_number(stdin.lock(), io::stdout()) {
                Ok(number) => number,
                Err(e) => {
                    eprintln!("error: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    // INVALID is a verdict, not a failure: exit 0 either way.
    println!("{}", report(&number));
}
