//! Battle domain types and pure queries for the rival decision engine.
//!
//! This crate sits between `rival-protocol` (engine boundary) and `rival-ai`
//! (the decision engine itself):
//!
//! ```text
//! rival-protocol (requests, log events, actions)
//!        │
//!        ▼
//! rival-battle (domain types + queries + memory) ← THIS CRATE
//!        │
//!        ▼
//! rival-ai (simulation, advisors, orchestrator)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] and [`TypeChart`] - types and the effectiveness chart
//! - [`CombatantSnapshot`], [`MoveSlot`] - one combatant as seen for a single decision
//! - [`SideState`], [`FieldState`], [`BattleState`] - the whole board
//! - [`Catalog`] - immutable move, item and ability tables
//!
//! ## Queries
//! - [`DamageModel`] - expected damage and heal of a move
//! - [`ResidualEffectsModel`] - end-of-turn damage and heal
//! - [`TurnOrderResolver`] - effective speed and move order
//!
//! ## Memory
//! - [`BattleMemory`] - facts gathered from the battle log
//!
//! # Example Usage
//!
//! ```ignore
//! use rival_battle::{BattleMemory, BattleState, Catalog, DamageModel};
//! use rival_protocol::{ActionRequest, Player, parse_log_chunk};
//!
//! let mut memory = BattleMemory::new(Player::P2);
//! memory.observe(&parse_log_chunk(1, log), &request);
//! let state = BattleState::from_request(&request, &memory)?;
//!
//! let catalog = Catalog::standard();
//! let model = DamageModel::new(&catalog);
//! ```

pub mod catalog;
pub mod query;
pub mod tracking;
pub mod types;

// Re-export main types at crate root for convenience
pub use catalog::{Catalog, MultiHit};
pub use query::{
    AttackContext, DamageHeal, DamageModel, MoveValue, ResidualEffectsModel, TurnOrderResolver,
};
pub use tracking::{BattleMemory, MemoryEntry, Transformation};
pub use types::{
    BattleState, CombatantSnapshot, FieldState, MoveCategory, MoveSlot, SideCondition,
    SideConditionState, SideOwner, SideState, StatBlock, StatStages, Status, Terrain, Type,
    TypeChart, Volatile, Weather, TYPE_CHART,
};

// Re-export commonly used protocol types
pub use rival_protocol::{Player, Stat};
