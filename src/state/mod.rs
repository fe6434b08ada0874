//! State management module
//!
//! This module handles per-user funnel state, its storage and the funnel
//! state machine itself.

pub mod context;
pub mod funnel;
pub mod storage;

// Re-export commonly used state components
pub use context::{ConversationState, IntakeData, Stage, Advance};
pub use funnel::{FunnelRouter, Pacing, Pause, Reply, Transition, route};
pub use storage::{StateStorage, StateStorageManager};
