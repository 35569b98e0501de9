//! Screen rendering for the interactive view.

use passgen::pass::charset;
use passgen::{Generated, Policy};

use crate::terminal::{
    BOLD, GREEN, RESET, box_bottom, box_line, box_line_center, box_rule, box_top,
    calculate_entropy, clear, flush, strength_meter,
};

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

/// Length slider: `8 ━━━━●───── 24`
fn slider(length: usize) -> String {
    let span = Policy::MAX_LENGTH - Policy::MIN_LENGTH;
    let pos = length - Policy::MIN_LENGTH;
    format!(
        "{} {}{GREEN}●{RESET}{} {}",
        Policy::MIN_LENGTH,
        "━".repeat(pos),
        "─".repeat(span - pos),
        Policy::MAX_LENGTH
    )
}

pub fn draw(policy: &Policy, current: &Generated, status: Option<&str>) {
    clear();
    box_top("passgen");
    box_line_center("Password Generator");
    box_rule();
    box_line("");
    box_line(&format!("  {BOLD}{}{RESET}", current.password));
    box_line("");
    box_rule();
    box_line(&format!("Password Length  {:>2}", policy.length()));
    box_line(&format!("  {}", slider(policy.length())));
    box_line(&format!(
        "{} Include Numbers            (n)",
        checkbox(policy.include_numbers())
    ));
    box_line(&format!(
        "{} Include Special Characters (s)",
        checkbox(policy.include_special_chars())
    ));
    box_rule();
    box_line(&format!(
        "STRENGTH  {}",
        strength_meter(Some(current.strength), true)
    ));
    box_line(&format!(
        "Entropy   {:.1} bits • Charset: {} chars",
        calculate_entropy(policy.length(), charset::size(policy)),
        charset::size(policy)
    ));
    box_bottom();
    print!("\r\n");
    print!(" ←/→ length   Enter regenerate   c copy   q quit\r\n");
    if let Some(msg) = status {
        print!("\r\n {msg}\r\n");
    }
    flush();
}
