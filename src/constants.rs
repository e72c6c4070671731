//! Centralized constants for kindabot.
//!
//! All default strings, generation limits, and file names live here so they
//! can be changed in one place.

/// Application name used in directory paths.
pub const APP_NAME: &str = "kindabot";

/// Display name used as the reply prefix in the transcript.
pub const BOT_NAME: &str = "KindaBot";

/// Default OpenAI model identifier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Maximum tokens for remote completions.
pub const MAX_TOKENS: u64 = 200;

/// Sampling temperature for remote completions.
pub const TEMPERATURE: f64 = 0.7;

/// System instruction sent with every remote completion.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant for a food delivery website. \
Keep answers brief and friendly.";

/// Environment variable holding the OpenAI credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "kindabot.toml";

/// Readline history filename.
pub const HISTORY_FILENAME: &str = "chat_history.txt";

// --- Transcript ---

/// Readline prompt shown before each user line.
pub const USER_PROMPT: &str = "You: ";

/// Banner printed when an interactive session starts.
pub const BANNER: &str = "Hello, KindaBot here. Type 'bye' to exit.";

/// Full-line inputs that end the session (compared lowercased and trimmed).
pub const EXIT_PHRASES: [&str; 3] = ["bye", "exit", "quit"];

/// Reply printed when the user types an exit phrase.
pub const EXIT_REPLY: &str = "Goodbye!";

/// Farewell printed when input closes or is interrupted.
pub const FAREWELL: &str = "Goodbye!";

// --- Local responder ---

/// Reply returned when no rule matches.
pub const DEFAULT_REPLY: &str = "Sorry, I don't understand fully yet. Can you rephrase?";
