//! Decision engine for an NPC battle participant.
//!
//! Built on `rival-battle` for snapshots and queries and on `rival-protocol`
//! for the engine boundary:
//!
//! ```text
//! ActionRequest + log events
//!        │
//!        ▼
//! DecisionOrchestrator ── BattleMemory
//!        │
//!        ├─ ForwardSimulator (MoveSelector per side, per turn)
//!        ├─ SwitchAdvisor    (re-simulates reserves)
//!        └─ UtilityAdvisor   (ordered rule table)
//!        │
//!        ▼
//!     Action
//! ```
//!
//! # Main Types
//!
//! - [`DecisionOrchestrator`] - one decision per request, owns battle memory
//! - [`ForwardSimulator`], [`EngagementOutcome`] - short-horizon 1v1 simulation
//! - [`MoveSelector`], [`MoveOptions`] - most probable offensive move
//! - [`UtilityAdvisor`], [`UtilityRule`] - non-attacking moves
//! - [`SwitchAdvisor`], [`SwitchDecision`] - switch recommendations
//! - [`AiConfig`] - tunable probabilities and thresholds
//!
//! # Example Usage
//!
//! ```ignore
//! use rival_ai::{AiConfig, DecisionOrchestrator};
//! use rival_protocol::{ActionRequest, Player, parse_log_chunk};
//!
//! let mut ai = DecisionOrchestrator::new(Player::P2, AiConfig::default());
//! let request = ActionRequest::from_json(json)?;
//! let action = ai.decide(&request, &parse_log_chunk(turn, log));
//! send(action.to_protocol_string());
//! ```

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod selector;
pub mod simulator;
pub mod switch;
pub mod utility;

pub use config::AiConfig;
pub use error::DecisionError;
pub use orchestrator::{DecisionOrchestrator, Notifier, TracingNotifier};
pub use selector::{MoveOptions, MoveSelector};
pub use simulator::{EngagementOutcome, ForwardSimulator};
pub use switch::{SwitchAdvisor, SwitchDecision};
pub use utility::{UtilityAdvisor, UtilityRule};
