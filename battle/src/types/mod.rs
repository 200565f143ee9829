//! Domain types for decision snapshots

mod combatant;
mod conditions;
mod field;
mod pokemon_type;
mod side;
mod stats;
mod status;

pub use combatant::{CombatantSnapshot, MoveCategory, MoveSlot};
pub use conditions::{SideCondition, SideConditionState, Terrain, Weather};
pub use field::FieldState;
pub use pokemon_type::{Type, TypeChart, TYPE_CHART};
pub use side::{BattleState, SideOwner, SideState};
pub use stats::{StatBlock, StatStages};
pub use status::{Status, Volatile};
