//! One-shot command line mode.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use clap::Parser;

pub use context::{CliError, Context};
pub use flags::CliFlags;

use crate::tui;

/// Parse `args`, generate, and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let flags = match CliFlags::try_parse_from(args) {
        Ok(flags) => flags,
        Err(e) => {
            let _ = e.print();
            return e.exit_code();
        }
    };

    let mut ctx = match Context::new(flags) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            return 1;
        }
    };

    if ctx.flags.interactive {
        return tui::run(ctx.settings);
    }

    match ctx.run() {
        Ok(()) | Err(CliError::Aborted) => 0,
        Err(e) => {
            prompts::error(&e.to_string());
            1
        }
    }
}
