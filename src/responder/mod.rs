//! Reply selection for kindabot.
//!
//! The [`Dispatcher`] owns the session mode and answers each line either
//! through the remote completion backend or from the local [`RuleBook`].

mod dispatcher;
mod rules;

pub use dispatcher::{Dispatcher, GenerationSettings, Reply, ReplySource};
#[cfg(test)]
pub use dispatcher::{ModeStatus, SessionMode};
pub use rules::RuleBook;
#[cfg(test)]
pub use rules::RuleError;

use crate::config::Config;

impl GenerationSettings {
    /// Reads the system instruction and sampling limits from config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            system_instruction: config.system_prompt().to_string(),
            max_tokens: config.max_tokens(),
            temperature: config.temperature(),
        }
    }
}
