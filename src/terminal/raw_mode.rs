//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

use super::flush;

/// Raw mode with a hidden cursor, both undone on drop.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        print!("\x1b[?25l");
        flush();
        Ok(Self { active: true })
    }

    /// Leave raw mode early (also happens on drop).
    pub fn restore(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            print!("\x1b[?25h");
            flush();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
