//! Intake funnel state machine
//!
//! [`route`] is the pure transition function: current state plus message in,
//! next state plus replies out. [`FunnelRouter`] binds it to a
//! [`StateStorage`] so every message is one atomic read-modify-write.

use std::time::Duration;
use crate::config::PacingConfig;
use crate::handlers::commands::{Keyword, MenuOption};
use crate::handlers::templates;
use crate::transport::InboundMessage;
use crate::utils::{helpers, logging};
use super::context::{Advance, ConversationState, Stage};
use super::storage::StateStorage;

/// Simulated typing pause requested before a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    None,
    Reset,
    Greeting,
    Info,
    Summary,
}

/// One outgoing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub pause: Pause,
}

impl Reply {
    pub fn immediate(text: impl Into<String>) -> Self {
        Self { text: text.into(), pause: Pause::None }
    }

    pub fn after(pause: Pause, text: impl Into<String>) -> Self {
        Self { text: text.into(), pause }
    }
}

/// Result of routing one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State to store; `None` means the user is (back) outside the funnel
    pub next: Option<ConversationState>,
    pub replies: Vec<Reply>,
}

impl Transition {
    fn to(next: Option<ConversationState>, reply: Reply) -> Self {
        Self { next, replies: vec![reply] }
    }
}

/// Route one message. `text` must already be trimmed.
pub fn route(current: Option<ConversationState>, text: &str, display_name: &str) -> Transition {
    route_classified(current, Keyword::classify(text), text, display_name)
}

/// Route a message whose keyword is already known.
///
/// Order: reset keyword, then the stage of an in-progress funnel, then
/// greetings, then menu numbers, then the fallback.
fn route_classified(
    current: Option<ConversationState>,
    keyword: Keyword,
    text: &str,
    display_name: &str,
) -> Transition {
    match (keyword, current) {
        (Keyword::Reset, _) => {
            Transition::to(None, Reply::after(Pause::Reset, templates::render_main_menu(display_name)))
        }
        (_, Some(state)) => match state.record_answer(text) {
            Advance::Next(next) => {
                let prompt = match next.stage {
                    Stage::AwaitingModel => templates::MODEL_PROMPT,
                    _ => templates::PROBLEM_PROMPT,
                };
                Transition::to(Some(next), Reply::immediate(prompt))
            }
            Advance::Complete(data) => {
                Transition::to(None, Reply::after(Pause::Summary, templates::render_summary(&data)))
            }
        },
        (Keyword::Greeting, None) => {
            Transition::to(None, Reply::after(Pause::Greeting, templates::render_main_menu(display_name)))
        }
        (Keyword::Option(MenuOption::RequestQuote), None) => {
            Transition::to(Some(ConversationState::new()), Reply::immediate(templates::APPLIANCE_PROMPT))
        }
        (Keyword::Option(MenuOption::Services), None) => {
            Transition::to(None, Reply::after(Pause::Info, templates::SERVICES_MESSAGE))
        }
        (Keyword::Option(MenuOption::TalkToOwner), None) => {
            Transition::to(None, Reply::after(Pause::Info, templates::FORWARDED_TO_OWNER))
        }
        (Keyword::Other, None) => Transition::to(None, Reply::immediate(templates::NOT_UNDERSTOOD)),
    }
}

/// Typing pause durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub reset: Duration,
    pub greeting: Duration,
    pub info: Duration,
    pub summary: Duration,
}

impl Pacing {
    /// No pauses at all
    pub fn immediate() -> Self {
        Self {
            reset: Duration::ZERO,
            greeting: Duration::ZERO,
            info: Duration::ZERO,
            summary: Duration::ZERO,
        }
    }

    /// Duration to wait before a reply, `None` when it goes out right away
    pub fn delay_for(&self, pause: Pause) -> Option<Duration> {
        let delay = match pause {
            Pause::None => Duration::ZERO,
            Pause::Reset => self.reset,
            Pause::Greeting => self.greeting,
            Pause::Info => self.info,
            Pause::Summary => self.summary,
        };
        (!delay.is_zero()).then_some(delay)
    }
}

impl From<&PacingConfig> for Pacing {
    fn from(config: &PacingConfig) -> Self {
        Self {
            reset: Duration::from_millis(config.reset_ms),
            greeting: Duration::from_millis(config.greeting_ms),
            info: Duration::from_millis(config.info_ms),
            summary: Duration::from_millis(config.summary_ms),
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from(&PacingConfig::default())
    }
}

/// The funnel bound to its state store
#[derive(Debug, Clone)]
pub struct FunnelRouter {
    storage: StateStorage,
    pacing: Pacing,
}

impl FunnelRouter {
    pub fn new(storage: StateStorage, pacing: Pacing) -> Self {
        Self { storage, pacing }
    }

    pub fn storage(&self) -> &StateStorage {
        &self.storage
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Route a message and commit the next state before handing back the replies
    pub fn handle(&self, message: &InboundMessage) -> Vec<Reply> {
        let text = helpers::normalize_body(&message.body);
        let display_name = helpers::display_name(message.display_name.as_deref());
        let user_id = message.sender.as_str();
        let keyword = Keyword::classify(text);

        self.storage.apply(user_id, |current| {
            let from = current.as_ref().map(|state| state.stage);
            let transition = route_classified(current, keyword, text, &display_name);
            let to = transition.next.as_ref().map(|state| state.stage);

            if keyword == Keyword::Reset {
                logging::log_funnel_reset(user_id, from.map(|stage| stage.as_str()));
            } else if from.is_some() && to.is_none() {
                logging::log_funnel_completed(user_id);
            } else if from != to {
                logging::log_stage_transition(
                    user_id,
                    from.map_or("none", |stage| stage.as_str()),
                    to.map_or("none", |stage| stage.as_str()),
                );
            }

            (transition.next, transition.replies)
        })
    }
}
