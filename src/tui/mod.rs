//! Interactive terminal view.
//!
//! Owns the mutable policy and regenerates on every change.

mod input;
mod text;

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{self, Event};
use rand::RngCore;
use tracing::{debug, warn};
use zeroize::Zeroize;

use passgen::{Generated, Policy, Settings, generate_password_with};

use crate::cli::prompts;
use crate::terminal::{RawModeGuard, clear, reset_terminal};

use input::{Action, action_for};

struct State {
    policy: Policy,
    current: Generated,
    rng: Box<dyn RngCore>,
    clipboard: Option<ClipboardContext>,
    status: Option<String>,
}

impl State {
    fn regenerate(&mut self) -> passgen::Result<()> {
        let mut next = generate_password_with(&self.policy, &mut self.rng)?;
        std::mem::swap(&mut self.current, &mut next);
        next.password.zeroize();
        Ok(())
    }

    /// Apply an action. Returns false when the view should close.
    fn apply(&mut self, action: Action) -> passgen::Result<bool> {
        self.status = None;
        let policy = match action {
            Action::Quit => return Ok(false),
            Action::Copy => {
                self.copy();
                return Ok(true);
            }
            Action::Regenerate => self.policy,
            // the slider stops at the bounds
            Action::Shorter => self
                .policy
                .with_length(self.policy.length() - 1)
                .unwrap_or(self.policy),
            Action::Longer => self
                .policy
                .with_length(self.policy.length() + 1)
                .unwrap_or(self.policy),
            Action::ToggleNumbers => self.policy.with_numbers(!self.policy.include_numbers()),
            Action::ToggleSpecial => self
                .policy
                .with_special_chars(!self.policy.include_special_chars()),
        };

        if policy != self.policy {
            debug!(
                length = policy.length(),
                numbers = policy.include_numbers(),
                special = policy.include_special_chars(),
                "policy changed"
            );
        }
        self.policy = policy;
        self.regenerate()?;
        Ok(true)
    }

    fn copy(&mut self) {
        if self.clipboard.is_none() {
            self.clipboard = ClipboardContext::new().ok();
        }
        self.status = Some(match self.clipboard.as_mut() {
            Some(ctx) => match ctx.set_contents(self.current.password.clone()) {
                Ok(()) => "copied!".to_owned(),
                Err(e) => {
                    warn!(error = %e, "clipboard write failed");
                    format!("Clipboard error: {e}")
                }
            },
            None => "Clipboard unavailable".to_owned(),
        });
    }
}

/// Run the interactive view until the user quits. Returns the exit code.
pub fn run(settings: Settings) -> i32 {
    match run_loop(settings) {
        Ok(()) => 0,
        Err(e) => {
            prompts::error(&e);
            1
        }
    }
}

fn run_loop(settings: Settings) -> Result<(), String> {
    let mut rng = settings.source.rng().map_err(|e| e.to_string())?;
    let current =
        generate_password_with(&settings.policy, &mut rng).map_err(|e| e.to_string())?;
    let mut state = State {
        policy: settings.policy,
        current,
        rng,
        clipboard: None,
        status: None,
    };

    let mut guard = RawModeGuard::new().map_err(|e| format!("Failed to enter raw mode: {e}"))?;

    loop {
        text::draw(&state.policy, &state.current, state.status.as_deref());

        let event = event::read().map_err(|e| format!("Failed to read input: {e}"))?;
        let Event::Key(key) = event else {
            continue;
        };
        let Some(action) = action_for(key) else {
            continue;
        };
        if !state.apply(action).map_err(|e| e.to_string())? {
            break;
        }
    }

    state.current.password.zeroize();
    guard.restore();
    clear();
    reset_terminal();
    Ok(())
}
