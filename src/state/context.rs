//! Conversation context management
//!
//! This module holds the per-user funnel record: the current stage and the
//! intake data collected so far.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc, Duration};

/// Position of a user inside the intake funnel.
///
/// A user outside the funnel has no stored record at all, so there is no
/// "none" variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    AwaitingAppliance,
    AwaitingModel,
    AwaitingProblem,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::AwaitingAppliance => "awaiting_appliance",
            Stage::AwaitingModel => "awaiting_model",
            Stage::AwaitingProblem => "awaiting_problem",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intake answers, filled in stage by stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeData {
    pub appliance: Option<String>,
    pub model: Option<String>,
    pub problem: Option<String>,
}

/// Outcome of recording one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Still mid-funnel
    Next(ConversationState),
    /// All three answers collected; the record should be dropped
    Complete(IntakeData),
}

/// User conversation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub stage: Stage,
    pub data: IntakeData,
    pub created_at: DateTime<Utc>,
    /// When this state was last touched (drives idle eviction)
    pub updated_at: DateTime<Utc>,
}

impl ConversationState {
    /// Fresh state at the start of the funnel
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            stage: Stage::AwaitingAppliance,
            data: IntakeData::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Store the answer for the current stage and move to the next one
    pub fn record_answer(mut self, answer: &str) -> Advance {
        self.updated_at = Utc::now();
        match self.stage {
            Stage::AwaitingAppliance => {
                self.data.appliance = Some(answer.to_string());
                self.stage = Stage::AwaitingModel;
                Advance::Next(self)
            }
            Stage::AwaitingModel => {
                self.data.model = Some(answer.to_string());
                self.stage = Stage::AwaitingProblem;
                Advance::Next(self)
            }
            Stage::AwaitingProblem => {
                self.data.problem = Some(answer.to_string());
                Advance::Complete(self.data)
            }
        }
    }

    /// Check whether the state has been idle for longer than `max_idle`
    pub fn is_idle(&self, max_idle: Duration, now: DateTime<Utc>) -> bool {
        now - self.updated_at > max_idle
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
