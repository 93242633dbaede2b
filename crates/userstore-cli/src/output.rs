//! Output formatting helpers.
//!
//! Data goes to stdout; status lines are decorated for humans.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use userstore_core::{User, UserId};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print one user as a single aligned row.
pub fn user_row(id: &UserId, user: &User) {
    println!(
        "{:>6}  {:<24} {:<32} {}",
        id.as_str().bold(),
        user.display_name,
        user.email,
        user.created_at.to_rfc3339().dimmed()
    );
}

/// Print a value as JSON, indented when `pretty` is set.
pub fn json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
