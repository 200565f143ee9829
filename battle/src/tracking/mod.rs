//! Battle memory and snapshot building from engine requests

mod memory;
mod snapshot;

pub use memory::{BattleMemory, MemoryEntry, Transformation};
