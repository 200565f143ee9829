//! Side (player) state

use std::collections::HashMap;

use super::combatant::CombatantSnapshot;
use super::conditions::{SideCondition, SideConditionState};
use super::field::FieldState;

/// Which party a side belongs to, from the deciding engine's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideOwner {
    /// The side the engine is deciding for
    Own,
    Opponent,
}

impl SideOwner {
    pub fn other(&self) -> Self {
        match self {
            SideOwner::Own => SideOwner::Opponent,
            SideOwner::Opponent => SideOwner::Own,
        }
    }
}

/// One party's side of the battle for a single decision
#[derive(Debug, Clone)]
pub struct SideState {
    pub owner: SideOwner,

    /// Side conditions (hazards, screens)
    pub conditions: HashMap<SideCondition, SideConditionState>,

    pub tailwind: bool,

    /// Reserve combatants that can still be sent in (fainted ones excluded)
    pub reserves: Vec<CombatantSnapshot>,

    /// The active combatant, or an empty snapshot when the slot is vacant
    pub active: CombatantSnapshot,

    /// Combatants this side has lost so far in the battle
    pub deaths: u32,
}

impl SideState {
    /// Create a side with an active combatant and nothing else
    pub fn new(owner: SideOwner, active: CombatantSnapshot) -> Self {
        Self {
            owner,
            conditions: HashMap::new(),
            tailwind: false,
            reserves: Vec::new(),
            active,
            deaths: 0,
        }
    }

    pub fn with_reserves(mut self, reserves: Vec<CombatantSnapshot>) -> Self {
        self.reserves = reserves;
        self
    }

    pub fn with_condition(mut self, cond: SideCondition) -> Self {
        self.add_condition(cond);
        self
    }

    pub fn with_tailwind(mut self) -> Self {
        self.tailwind = true;
        self
    }

    pub fn with_deaths(mut self, deaths: u32) -> Self {
        self.deaths = deaths;
        self
    }

    /// A copy of this side with `active` brought in; conditions and reserves are kept
    pub fn with_active(&self, active: CombatantSnapshot) -> Self {
        Self {
            active,
            ..self.clone()
        }
    }

    /// Find a reserve by identity
    pub fn find_reserve(&self, identity: &str) -> Option<&CombatantSnapshot> {
        self.reserves.iter().find(|c| c.identity == identity)
    }

    /// Check if side has a condition
    pub fn has_condition(&self, cond: SideCondition) -> bool {
        self.conditions.contains_key(&cond)
    }

    /// Get layers for a condition (0 if not present)
    pub fn condition_layers(&self, cond: SideCondition) -> u8 {
        self.conditions.get(&cond).map_or(0, |s| s.layers)
    }

    /// Add a side condition
    /// Returns true if the condition was added (false if already at max layers)
    pub fn add_condition(&mut self, cond: SideCondition) -> bool {
        if let Some(state) = self.conditions.get_mut(&cond) {
            state.add_layer(cond)
        } else {
            self.conditions.insert(cond, SideConditionState::new());
            true
        }
    }

    /// Check if any hazards are set
    pub fn has_hazards(&self) -> bool {
        self.conditions.keys().any(|c| c.is_hazard())
    }

    /// Check if any screens are active
    pub fn has_screens(&self) -> bool {
        self.conditions.keys().any(|c| c.is_screen())
    }
}

/// Field plus both sides, rebuilt for every decision
#[derive(Debug, Clone)]
pub struct BattleState {
    pub field: FieldState,
    pub own: SideState,
    pub opponent: SideState,
}

impl BattleState {
    pub fn new(field: FieldState, own: SideState, opponent: SideState) -> Self {
        Self {
            field,
            own,
            opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatBlock;

    fn combatant(identity: &str) -> CombatantSnapshot {
        CombatantSnapshot::new(identity, identity, StatBlock::new(100.0, 50.0, 50.0, 50.0, 50.0, 50.0))
    }

    #[test]
    fn test_new_side() {
        let side = SideState::new(SideOwner::Own, combatant("pikachu"));
        assert_eq!(side.owner, SideOwner::Own);
        assert!(side.reserves.is_empty());
        assert!(!side.tailwind);
        assert_eq!(side.deaths, 0);
        assert_eq!(SideOwner::Own.other(), SideOwner::Opponent);
    }

    #[test]
    fn test_side_conditions() {
        let mut side = SideState::new(SideOwner::Own, combatant("pikachu"));

        assert!(side.add_condition(SideCondition::StealthRock));
        assert!(side.has_condition(SideCondition::StealthRock));
        assert!(!side.add_condition(SideCondition::StealthRock));
        assert_eq!(side.condition_layers(SideCondition::StealthRock), 1);

        assert!(side.add_condition(SideCondition::Spikes));
        assert!(side.add_condition(SideCondition::Spikes));
        assert!(side.add_condition(SideCondition::Spikes));
        assert!(!side.add_condition(SideCondition::Spikes));
        assert_eq!(side.condition_layers(SideCondition::Spikes), 3);
        assert_eq!(side.condition_layers(SideCondition::ToxicSpikes), 0);
    }

    #[test]
    fn test_has_hazards_and_screens() {
        let side = SideState::new(SideOwner::Opponent, combatant("eevee"));
        assert!(!side.has_hazards());
        assert!(!side.has_screens());

        let side = side.with_condition(SideCondition::StealthRock);
        assert!(side.has_hazards());
        assert!(!side.has_screens());

        let side = side.with_condition(SideCondition::Reflect);
        assert!(side.has_screens());
    }

    #[test]
    fn test_with_active_keeps_conditions() {
        let side = SideState::new(SideOwner::Own, combatant("pikachu"))
            .with_condition(SideCondition::Spikes)
            .with_reserves(vec![combatant("raichu")]);
        let swapped = side.with_active(combatant("raichu"));

        assert_eq!(swapped.active.identity, "raichu");
        assert_eq!(swapped.condition_layers(SideCondition::Spikes), 1);
        assert!(swapped.find_reserve("raichu").is_some());
        assert!(side.find_reserve("zapdos").is_none());
    }
}
