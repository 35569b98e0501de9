//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::terminal::strength_meter;
use passgen::entropy::Source;
use passgen::{Policy, Settings, generate_password_with};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] passgen::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// User declined a prompt. Not a failure.
    #[error("aborted")]
    Aborted,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Build settings from parsed flags. Fails on an out-of-range length.
    pub fn new(flags: CliFlags) -> Result<Self, CliError> {
        let policy = Policy::new(flags.length, flags.numbers, flags.special)?;

        let source = match (flags.seed, flags.urandom) {
            (Some(seed), _) => Source::Seeded(seed),
            (None, true) => Source::Os,
            (None, false) => Source::Thread,
        };

        let settings = Settings {
            policy,
            count: flags.number.get(),
            show_strength: flags.strength,
            source,
            ..Default::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        quiet::set(self.flags.quiet);
        if let Source::Seeded(seed) = self.settings.source {
            prompts::seeded_warning(seed);
        }
        self.apply_clipboard()?;
        self.generate_output()
    }

    fn apply_clipboard(&mut self) -> Result<(), CliError> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                self.settings.to_clipboard = true;
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                if prompts::clipboard_fallback_prompt() {
                    self.settings.to_clipboard = false;
                    Ok(())
                } else {
                    Err(CliError::Aborted)
                }
            }
        }
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), CliError> {
        let mut rng = self.settings.source.rng()?;
        let policy = self.settings.policy;
        let color = quiet::stdout_is_tty();
        debug!(
            length = policy.length(),
            numbers = policy.include_numbers(),
            special = policy.include_special_chars(),
            count = self.settings.count,
            source = self.settings.source.name(),
            "generating"
        );

        let mut passwords = String::new();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        for _ in 0..self.settings.count {
            let mut generated = generate_password_with(&policy, &mut rng)?;
            if self.settings.to_clipboard {
                passwords.push_str(&generated.password);
                passwords.push('\n');
            } else {
                let mut line = generated.password.clone();
                if self.settings.show_strength {
                    line.push_str("  ");
                    line.push_str(&strength_meter(Some(generated.strength), color));
                }
                line.push('\n');
                let _ = out.write_all(line.as_bytes());
                line.zeroize();
            }
            generated.password.zeroize();
        }
        let _ = out.flush();
        drop(out);

        if self.settings.to_clipboard {
            let result = self.copy(&passwords);
            passwords.zeroize();
            result?;
        }
        Ok(())
    }

    fn copy(&mut self, passwords: &str) -> Result<(), CliError> {
        let Some(ctx) = self.clipboard.as_mut() else {
            return Ok(());
        };
        // single passwords go in without the trailing newline
        let contents = if self.settings.count == 1 {
            passwords.trim_end_matches('\n')
        } else {
            passwords
        };
        ctx.set_contents(contents.to_owned())
            .map_err(|e| CliError::Clipboard(e.to_string()))?;
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        prompts::clipboard_copied(self.settings.count);
        Ok(())
    }
}
