//! Keyword handling module
//!
//! Customers don't type slash commands; they type words and menu numbers.
//! This module classifies a (trimmed) message body into the keywords the
//! funnel reacts to.

use std::sync::LazyLock;
use regex::Regex;

static RESET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(menu|voltar|menu principal|cancelar)$").expect("reset keyword pattern")
});

static INTEREST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)tenho interesse no serviço da maq service").expect("interest phrase pattern")
});

static GREETING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(oi|olá|ola|bom dia|boa tarde|boa noite)[!.,]*$").expect("greeting pattern")
});

/// Numbered options of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// `1` - request a quote or technical visit
    RequestQuote,
    /// `2` - list the services offered
    Services,
    /// `3` - talk to the owner
    TalkToOwner,
}

impl MenuOption {
    /// Exact match against `1`, `2` or `3`
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "1" => Some(MenuOption::RequestQuote),
            "2" => Some(MenuOption::Services),
            "3" => Some(MenuOption::TalkToOwner),
            _ => None,
        }
    }
}

/// What a message body means to the funnel, ignoring the user's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Abort whatever is going on and show the main menu
    Reset,
    /// Greeting or the pre-filled interest phrase
    Greeting,
    Option(MenuOption),
    Other,
}

impl Keyword {
    /// Classify a message body. Reset keywords win over everything else.
    pub fn classify(text: &str) -> Self {
        if is_reset(text) {
            Keyword::Reset
        } else if is_greeting(text) {
            Keyword::Greeting
        } else if let Some(option) = MenuOption::parse(text) {
            Keyword::Option(option)
        } else {
            Keyword::Other
        }
    }
}

/// Whole-string, case-insensitive reset keyword match
pub fn is_reset(text: &str) -> bool {
    RESET_PATTERN.is_match(text)
}

/// Greeting words, or the interest phrase anywhere in the text
pub fn is_greeting(text: &str) -> bool {
    INTEREST_PATTERN.is_match(text) || GREETING_PATTERN.is_match(text)
}
