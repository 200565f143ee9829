//! Per-decision combatant snapshots

use std::collections::HashSet;

use super::pokemon_type::Type;
use super::stats::{StatBlock, StatStages};
use super::status::{Status, Volatile};

/// Damage category of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "physical" => Some(MoveCategory::Physical),
            "special" => Some(MoveCategory::Special),
            "status" => Some(MoveCategory::Status),
            _ => None,
        }
    }
}

/// One move on a combatant, with live PP and disabled state
#[derive(Debug, Clone, PartialEq)]
pub struct MoveSlot {
    pub id: String,
    pub move_type: Type,
    pub category: MoveCategory,
    pub power: f64,
    /// Hit chance in 0..=1; `None` for moves that cannot miss
    pub accuracy: Option<f64>,
    pub pp: u32,
    pub priority: i8,
    pub disabled: bool,
    pub target: String,
}

impl MoveSlot {
    pub fn new(id: impl Into<String>, move_type: Type, category: MoveCategory, power: f64) -> Self {
        Self {
            id: id.into(),
            move_type,
            category,
            power,
            accuracy: Some(1.0),
            pp: 10,
            priority: 0,
            disabled: false,
            target: "normal".to_string(),
        }
    }

    /// A status move of the given type
    pub fn status(id: impl Into<String>, move_type: Type) -> Self {
        Self::new(id, move_type, MoveCategory::Status, 0.0)
    }

    pub fn with_accuracy(mut self, accuracy: Option<f64>) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_pp(mut self, pp: u32) -> Self {
        self.pp = pp;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Hit chance, reading a never-miss move as certain
    pub fn hit_chance(&self) -> f64 {
        self.accuracy.unwrap_or(1.0)
    }

    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }
}

/// Everything the engine knows about one combatant for a single decision.
///
/// Built fresh each decision from live engine state plus battle memory and
/// never persisted. A slot with nobody in it is represented by
/// [`CombatantSnapshot::empty`] so every calculation stays defined.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatantSnapshot {
    /// Stable identity for the whole battle
    pub identity: String,
    pub species: String,
    pub weight: f64,
    pub level: u32,

    // === Stats ===
    pub stats: StatBlock,
    pub boosts: StatStages,
    pub types: Vec<Type>,
    pub current_hp: f64,

    // === Ability, item, conditions ===
    pub ability: String,
    /// Held item id, empty when none
    pub item: String,
    pub status: Option<Status>,
    pub volatiles: HashSet<Volatile>,

    pub moves: Vec<MoveSlot>,
    pub trapped: bool,

    // === Facts carried over from battle memory ===
    pub hits_taken: u32,
    pub disguise_broken: bool,
    pub became_hero: bool,
}

impl CombatantSnapshot {
    /// Create a combatant at full HP with no ability, item or moves
    pub fn new(identity: impl Into<String>, species: impl Into<String>, stats: StatBlock) -> Self {
        Self {
            identity: identity.into(),
            species: species.into(),
            weight: 50.0,
            level: 100,
            stats,
            boosts: StatStages::default(),
            types: Vec::new(),
            current_hp: stats.hp,
            ability: String::new(),
            item: String::new(),
            status: None,
            volatiles: HashSet::new(),
            moves: Vec::new(),
            trapped: false,
            hits_taken: 0,
            disguise_broken: false,
            became_hero: false,
        }
    }

    /// The placeholder for an empty slot: zero stats, no types, no moves
    pub fn empty() -> Self {
        let mut empty = Self::new("", "", StatBlock::default());
        empty.weight = 0.0;
        empty.level = 1;
        empty
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn with_types(mut self, types: &[Type]) -> Self {
        self.types = types.to_vec();
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_hp(mut self, hp: f64) -> Self {
        self.current_hp = hp;
        self
    }

    pub fn with_boosts(mut self, boosts: StatStages) -> Self {
        self.boosts = boosts;
        self
    }

    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = ability.into();
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = item.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_volatile(mut self, volatile: Volatile) -> Self {
        self.volatiles.insert(volatile);
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveSlot>) -> Self {
        self.moves = moves;
        self
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    pub fn has_volatile(&self, v: &Volatile) -> bool {
        self.volatiles.contains(v)
    }

    pub fn has_item(&self) -> bool {
        !self.item.is_empty()
    }

    pub fn has_move(&self, id: &str) -> bool {
        self.moves.iter().any(|m| m.id == id)
    }

    /// True if any known move id is in `ids`
    pub fn has_move_in(&self, ids: &HashSet<&'static str>) -> bool {
        self.moves.iter().any(|m| ids.contains(m.id.as_str()))
    }

    /// First known move whose id is in `ids`
    pub fn find_move_in(&self, ids: &HashSet<&'static str>) -> Option<&MoveSlot> {
        self.moves.iter().find(|m| ids.contains(m.id.as_str()))
    }

    /// Moves that can be selected this turn
    pub fn enabled_moves(&self) -> impl Iterator<Item = &MoveSlot> {
        self.moves.iter().filter(|m| !m.disabled)
    }

    pub fn is_full_hp(&self) -> bool {
        self.current_hp >= self.stats.hp
    }

    /// Current HP as a fraction of max HP (0 for an empty slot)
    pub fn hp_fraction(&self) -> f64 {
        if self.stats.hp > 0.0 {
            self.current_hp / self.stats.hp
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CombatantSnapshot {
        CombatantSnapshot::new(
            "snorlax-1",
            "Snorlax",
            StatBlock::new(160.0, 110.0, 65.0, 65.0, 110.0, 30.0),
        )
        .with_types(&[Type::Normal])
        .with_moves(vec![
            MoveSlot::new("bodyslam", Type::Normal, MoveCategory::Physical, 85.0),
            MoveSlot::status("rest", Type::Psychic).disabled(),
        ])
    }

    #[test]
    fn test_empty_snapshot() {
        let empty = CombatantSnapshot::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.stats.hp, 0.0);
        assert_eq!(empty.hp_fraction(), 0.0);
        assert!(empty.types.is_empty());
    }

    #[test]
    fn test_new_snapshot_is_full_hp() {
        let snorlax = sample();
        assert!(!snorlax.is_empty());
        assert!(snorlax.is_full_hp());
        assert_eq!(snorlax.hp_fraction(), 1.0);
        assert!(!snorlax.with_hp(80.0).is_full_hp());
    }

    #[test]
    fn test_enabled_moves_skip_disabled() {
        let snorlax = sample();
        let ids: Vec<&str> = snorlax.enabled_moves().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["bodyslam"]);
        assert!(snorlax.has_move("rest"));
    }

    #[test]
    fn test_has_move_in() {
        let snorlax = sample();
        let set: HashSet<&'static str> = ["rest", "recover"].into_iter().collect();
        assert!(snorlax.has_move_in(&set));
        assert_eq!(snorlax.find_move_in(&set).map(|m| m.id.as_str()), Some("rest"));
    }

    #[test]
    fn test_move_hit_chance() {
        let swift = MoveSlot::new("swift", Type::Normal, MoveCategory::Special, 60.0)
            .with_accuracy(None);
        assert_eq!(swift.hit_chance(), 1.0);
        let zap = MoveSlot::new("zapcannon", Type::Electric, MoveCategory::Special, 120.0)
            .with_accuracy(Some(0.5));
        assert_eq!(zap.hit_chance(), 0.5);
    }

    #[test]
    fn test_category_from_protocol() {
        assert_eq!(MoveCategory::from_protocol("Physical"), Some(MoveCategory::Physical));
        assert_eq!(MoveCategory::from_protocol("status"), Some(MoveCategory::Status));
        assert_eq!(MoveCategory::from_protocol("other"), None);
    }
}
