//! Terminal output utilities.
//!
//! Box drawing, strength meter, entropy figures, ANSI helpers. Every line ends
//! in `\r\n` so the same helpers work in raw mode.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use passgen::Strength;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[38;5;48m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 48;

/// Print box top with optional title: ┌─ Title ─────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        print!("┌{}┐\r\n", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        print!("┌{}{}┐\r\n", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content              │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    print!("│ {}{} │\r\n", content, " ".repeat(padding));
}

/// Print centered box content line: │     content      │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    print!(
        "│ {}{}{} │\r\n",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    );
}

/// Print a horizontal rule (box style).
pub fn box_rule() {
    print!("├{}┤\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Print box bottom: └──────────────────┘
pub fn box_bottom() {
    print!("└{}┘\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

const LIT: char = '▮';
const UNLIT: char = '▯';

/// Four-segment meter; segment `i` is lit when the tier is at least `i`.
pub fn strength_meter(strength: Option<Strength>, color: bool) -> String {
    let score = passgen::pass::strength::score(strength);
    let mut meter = String::new();

    for segment in 1..=Strength::ALL.len() as u8 {
        let lit = score >= segment;
        match (lit, color) {
            (true, true) => {
                meter.push_str(GREEN);
                meter.push(LIT);
                meter.push_str(RESET);
            }
            (true, false) => meter.push(LIT),
            (false, true) => {
                meter.push_str(DIM);
                meter.push(UNLIT);
                meter.push_str(RESET);
            }
            (false, false) => meter.push(UNLIT),
        }
    }

    let label = strength.map_or("None", Strength::label);
    format!("{meter} {label}")
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}
