//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - errors are always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            println!("*** -COPIED TO CLIPBOARD- ***");
        } else {
            println!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
        }
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Returns true to fall back to the terminal, false to abort.
/// Quiet or non-interactive runs fall back without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        warn("Clipboard unavailable, printing to terminal");
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Warn that a fixed seed makes output predictable.
pub fn seeded_warning(seed: u64) {
    warn(&format!(
        "Warning: seed {seed} makes every run print the same passwords"
    ));
}
