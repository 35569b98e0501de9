//! Password generation settings.

mod policy;

pub use policy::Policy;

use crate::entropy::Source;

/// Run configuration for the front ends. Lives for one process; never saved.
#[derive(Debug, Clone)]
pub struct Settings {
    pub policy: Policy,
    pub count: usize,
    pub to_clipboard: bool,
    pub show_strength: bool,
    pub source: Source,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            count: 1,
            to_clipboard: false,
            show_strength: false,
            source: Source::Thread,
        }
    }
}
