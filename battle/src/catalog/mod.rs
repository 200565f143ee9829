//! Immutable move and item knowledge used by the decision engine
//!
//! Everything the advisors and the damage model need to know about named
//! moves and items, gathered in one value. Build the standard set with
//! [`Catalog::standard`], or construct a custom one for tests.

mod tables;

use std::collections::{HashMap, HashSet};

use crate::types::{SideCondition, StatStages, Status, Type, Volatile};

/// Expected-hit class of a multi-hit move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiHit {
    /// Hits 2 to 5 times
    Standard,
    /// Always hits twice
    Double,
    /// Always hits three times
    Triple,
    /// Triple Kick / Triple Axel: each hit rolls accuracy, power escalates
    TripleKick,
    /// Up to ten hits, each rolling accuracy
    PopulationBomb,
}

impl MultiHit {
    /// Moves with a fixed or 2-5 hit count; these split across shields and
    /// bypass Sturdy and Focus Sash
    pub fn splits_damage(&self) -> bool {
        matches!(self, MultiHit::Standard | MultiHit::Double | MultiHit::Triple)
    }
}

/// Static move/item catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    // === Move effects ===
    pub status_moves: HashMap<&'static str, Status>,
    pub volatile_moves: HashMap<&'static str, Volatile>,
    pub boost_moves: HashMap<&'static str, StatStages>,
    pub flinch_chance: HashMap<&'static str, f64>,
    /// Fraction of dealt damage taken back as recoil
    pub recoil: HashMap<&'static str, f64>,
    /// Fraction of dealt damage restored to the user
    pub drain: HashMap<&'static str, f64>,
    pub multi_hit: HashMap<&'static str, MultiHit>,
    /// Side condition set on the opponent's side
    pub hazard_setters: HashMap<&'static str, SideCondition>,
    /// Side condition set on the user's side
    pub screen_moves: HashMap<&'static str, SideCondition>,

    // === Move classes ===
    pub contact: HashSet<&'static str>,
    pub punch: HashSet<&'static str>,
    pub sound: HashSet<&'static str>,
    pub bullet: HashSet<&'static str>,
    pub always_crit: HashSet<&'static str>,
    pub level_damage: HashSet<&'static str>,
    pub half_hp_damage: HashSet<&'static str>,
    pub hazard_removal: HashSet<&'static str>,
    pub anti_boost: HashSet<&'static str>,
    /// Anti-boost moves that move last (phazing)
    pub low_priority_anti_boost: HashSet<&'static str>,
    pub protect: HashSet<&'static str>,
    pub pivot: HashSet<&'static str>,
    pub offensive_pivot: HashSet<&'static str>,
    pub self_recovery: HashSet<&'static str>,
    pub sacrifice: HashSet<&'static str>,
    pub item_manipulation: HashSet<&'static str>,
    /// Damaging moves that the utility rules still consider
    pub offensive_utility: HashSet<&'static str>,
    pub baby_unboost: HashSet<&'static str>,

    // === Items ===
    pub choice_items: HashSet<&'static str>,
    pub gems: HashMap<&'static str, Type>,
    pub type_boosters: HashMap<&'static str, Type>,

    /// Assumed power of happiness-based moves
    pub happiness_power: f64,
}

impl Catalog {
    /// The standard catalog
    pub fn standard() -> Self {
        tables::standard()
    }

    pub fn flinch(&self, move_id: &str) -> f64 {
        self.flinch_chance.get(move_id).copied().unwrap_or(0.0)
    }

    pub fn multi_hit(&self, move_id: &str) -> Option<MultiHit> {
        self.multi_hit.get(move_id).copied()
    }

    /// True for multi-hit moves whose damage is split across shields
    pub fn splits_damage(&self, move_id: &str) -> bool {
        self.multi_hit(move_id).is_some_and(|m| m.splits_damage())
    }

    pub fn boosts(&self, move_id: &str) -> Option<&StatStages> {
        self.boost_moves.get(move_id)
    }

    pub fn is_boost_move(&self, move_id: &str) -> bool {
        self.boost_moves.contains_key(move_id)
    }

    pub fn is_choice_item(&self, item: &str) -> bool {
        self.choice_items.contains(item)
    }
}
