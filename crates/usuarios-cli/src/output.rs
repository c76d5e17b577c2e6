//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use usuarios_core::{FieldErrors, Notification, Notifier, Severity, User};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print one error line per rejected field.
pub fn field_errors(errors: &FieldErrors) {
    for e in errors.iter() {
        error(&e.to_string());
    }
}

/// Print users as an aligned table.
pub fn users_table(users: &[User]) {
    let id_width = users
        .iter()
        .map(|u| u.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max(2);
    let name_width = users
        .iter()
        .map(|u| u.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    println!(
        "{}",
        format!(
            "{:>id_width$}  {:<name_width$}  {}",
            "ID", "NAME", "DESCRIPTION"
        )
        .dimmed()
    );
    for user in users {
        println!(
            "{:>id_width$}  {:<name_width$}  {}",
            user.id, user.name, user.description
        );
    }
}

/// Shows controller notifications on the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        let line = format!("{}: {}", notification.summary, notification.detail);
        match notification.severity {
            Severity::Success => success(&line),
            Severity::Error => error(&line),
        }
    }
}
