//! Terminal UI utilities for status messages.
//!
//! Status lines go to stderr; stdout carries only command results.
//!
//! ```no_run
//! use probe_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("3 dependencies resolved");
//! ```

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{info, success};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support for status messages.
///
/// `--no-color` wins over everything else.
pub fn init_colors(no_color: bool) {
    COLORS_ENABLED.store(!no_color && should_use_color(), Ordering::Relaxed);
}

/// Silence status messages; `--quiet` leaves only errors on stderr.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

static COLORS_ENABLED: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

pub(crate) fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}

pub(crate) fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}
