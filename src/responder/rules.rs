//! Keyword rules for the local responder.
//!
//! A [`RuleBook`] is an ordered list of [`Rule`]s. The first rule with a
//! trigger contained in the lowercased input wins, so order is priority.

use thiserror::Error;

use crate::config::RuleEntry;
use crate::constants::DEFAULT_REPLY;

/// One trigger set and the fixed text it answers with.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    triggers: Vec<String>,
    response: String,
}

/// A configured rule that cannot be used.
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    #[error("rule #{index} has no keywords")]
    NoKeywords { index: usize },
    #[error("rule #{index} has an empty response")]
    EmptyResponse { index: usize },
}

impl Rule {
    /// Creates a rule. Triggers are lowercased; blank triggers are dropped.
    pub fn new<I, S>(triggers: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            triggers: triggers
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            response: response.into(),
        }
    }

    /// Whether any trigger occurs in `lowered`, which must already be lowercase.
    fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t.as_str()))
    }

    pub fn response(&self) -> &str {
        &self.response
    }
}

/// The ordered rule table consulted by the local responder.
///
/// Built once at startup and never modified afterwards.
#[derive(Debug, Clone)]
pub struct RuleBook {
    rules: Vec<Rule>,
}

impl RuleBook {
    /// The built-in rules, in priority order.
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                Rule::new(
                    ["hi", "hello", "hey"],
                    "Hello! I'm here to help. What's on your mind?",
                ),
                Rule::new(
                    ["how are you"],
                    "I'm a script, but I'm functioning correctly. Thanks!",
                ),
                Rule::new(["name"], "You can call me KindaBot, your site assistant."),
                Rule::new(
                    ["menu", "food", "order"],
                    "You can browse our menu on the website. If you'd like, tell me what \
you'd like to order and I'll place the order for you.",
                ),
                Rule::new(["bye", "exit", "quit"], "Goodbye! Have a great day!"),
            ],
        }
    }

    /// The built-in rules followed by `extra` rules from configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`RuleError`] for the first configured rule without a
    /// usable keyword or with a blank response.
    pub fn with_extra(extra: &[RuleEntry]) -> Result<Self, RuleError> {
        let mut book = Self::builtin();
        for (index, entry) in extra.iter().enumerate() {
            let rule = Rule::new(&entry.keywords, entry.response.trim());
            if rule.triggers.is_empty() {
                return Err(RuleError::NoKeywords { index: index + 1 });
            }
            if rule.response.is_empty() {
                return Err(RuleError::EmptyResponse { index: index + 1 });
            }
            book.rules.push(rule);
        }
        Ok(book)
    }

    /// Returns the response of the first matching rule, or the default reply.
    pub fn answer(&self, input: &str) -> &str {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|r| r.matches(&lowered))
            .map_or(DEFAULT_REPLY, Rule::response)
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::builtin()
    }
}
