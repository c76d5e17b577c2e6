//! Terminal confirmation prompt.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use colored::Colorize;
use tracing::warn;

use usuarios_core::{Confirm, ConfirmationPrompt};

/// Asks on stderr and reads the answer from stdin.
///
/// Only `y`/`yes` (any case) accepts. End of input or a read error rejects.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

#[async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, prompt: &ConfirmationPrompt) -> bool {
        eprintln!("{}", prompt.header.red().bold());
        eprint!(
            "{} [y = {}, N = {}] ",
            prompt.message, prompt.accept_label, prompt.reject_label
        );
        let _ = io::stderr().flush();

        let mut input = String::new();
        if let Err(e) = io::stdin().lock().read_line(&mut input) {
            warn!(error = %e, "Could not read confirmation");
            return false;
        }

        is_yes(&input)
    }
}

fn is_yes(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
