//! User-facing terminal messages
//!
//! Warnings and errors meant for people, kept apart from `log` output
//! (no timestamps, levels or module paths).

use owo_colors::OwoColorize;

/// Yellow warning on stderr, padded with blank lines
///
/// ```ignore
/// output::warn("Type data unavailable; --types has no effect.");
/// ```
pub fn warn(message: &str) {
    eprintln!("\n{}\n", message.yellow());
}

/// Red error on stderr, padded with blank lines
///
/// ```ignore
/// output::error("Failed to load catalog from pokeapi");
/// ```
pub fn error(message: &str) {
    eprintln!("\n{}\n", message.red());
}

/// Plain status line on stderr (keeps stdout clean for `--json`)
pub fn status(message: &str) {
    eprintln!("{}", message.dimmed());
}
