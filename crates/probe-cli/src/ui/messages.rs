//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::{colors_enabled, is_quiet};

/// Print a success message to stderr, unless quiet.
pub fn success(message: &str) {
    if is_quiet() {
        return;
    }
    if colors_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {message}");
    }
}

/// Print an info message to stderr, unless quiet.
pub fn info(message: &str) {
    if is_quiet() {
        return;
    }
    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {message}");
    }
}
