//! Action request types
//!
//! These types represent the JSON document the battle engine sends when it
//! needs a decision for the NPC side.

use super::battle::{Player, to_id};
use crate::ParseError;
use serde::Deserialize;

/// A request asking the NPC side to choose an action
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    /// Player id of the deciding side ("p1" or "p2")
    pub side: String,

    /// A replacement must be chosen this call
    #[serde(default)]
    pub force_switch: bool,

    /// Global field conditions
    #[serde(default)]
    pub field: FieldView,

    /// The deciding side
    pub own: SideView,

    /// The opposing side
    pub opponent: SideView,
}

impl ActionRequest {
    /// Parse a request from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The deciding player
    pub fn own_player(&self) -> Option<Player> {
        Player::parse(&self.side)
    }

    /// The opposing player, assuming a two-player battle
    pub fn opponent_player(&self) -> Option<Player> {
        match self.own_player()? {
            Player::P1 => Some(Player::P2),
            Player::P2 => Some(Player::P1),
            _ => None,
        }
    }

    /// Look up a move on the deciding side's active combatant by normalized id
    pub fn find_move(&self, id: &str) -> Option<&MoveView> {
        self.own
            .active
            .as_ref()
            .and_then(|active| active.moves.iter().find(|m| to_id(&m.id) == id))
    }
}

/// Weather, terrain and room effects
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    #[serde(default)]
    pub weather: Option<String>,

    #[serde(default)]
    pub terrain: Option<String>,

    #[serde(default)]
    pub trick_room: bool,
}

/// One side of the field as the engine reports it
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideView {
    /// Active slot reference used as a move target ("p1a")
    #[serde(default)]
    pub slot: Option<String>,

    /// Entry hazards, repeated once per layer
    #[serde(default)]
    pub hazards: Vec<String>,

    /// Screens currently up
    #[serde(default)]
    pub screens: Vec<String>,

    #[serde(default)]
    pub tailwind: bool,

    /// The active combatant, absent when the slot is empty
    #[serde(default)]
    pub active: Option<CombatantView>,

    /// Every team member, the active one included
    #[serde(default)]
    pub team: Vec<CombatantView>,
}

impl SideView {
    /// Team members that could be switched in
    pub fn available_switches(&self) -> Vec<&CombatantView> {
        let active_id = self.active.as_ref().map(|a| a.id.as_str());
        self.team
            .iter()
            .filter(|p| Some(p.id.as_str()) != active_id && !p.is_fainted())
            .collect()
    }
}

/// A combatant's live state
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantView {
    /// Stable identity for the whole battle
    pub id: String,

    pub species: String,

    #[serde(default)]
    pub weight: f64,

    #[serde(default = "default_level")]
    pub level: u32,

    pub stats: StatsView,

    #[serde(default)]
    pub boosts: BoostsView,

    #[serde(default)]
    pub types: Vec<String>,

    /// Current HP
    pub hp: f64,

    #[serde(default)]
    pub ability: String,

    #[serde(default)]
    pub item: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub volatiles: Vec<String>,

    #[serde(default)]
    pub moves: Vec<MoveView>,

    #[serde(default)]
    pub trapped: bool,
}

fn default_level() -> u32 {
    100
}

impl CombatantView {
    pub fn is_fainted(&self) -> bool {
        self.hp <= 0.0
    }
}

/// Stat block
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct StatsView {
    pub hp: f64,
    pub atk: f64,
    pub def: f64,
    pub spa: f64,
    pub spd: f64,
    pub spe: f64,
}

/// Stat stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct BoostsView {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

/// A move slot with real-time PP and disabled state
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveView {
    /// Move ID (lowercase, no spaces)
    pub id: String,

    #[serde(default)]
    pub power: f64,

    #[serde(rename = "type")]
    pub move_type: String,

    /// "physical", "special" or "status"
    pub category: String,

    /// Accuracy in percent; absent for moves that cannot miss
    #[serde(default)]
    pub accuracy: Option<f64>,

    #[serde(default)]
    pub pp: u32,

    #[serde(default)]
    pub priority: i8,

    #[serde(default)]
    pub disabled: bool,

    /// Target kind (normal, self, allySide, etc.)
    #[serde(default)]
    pub target: String,
}

impl MoveView {
    /// Whether the move is aimed at a single opposing slot
    pub fn targets_opponent(&self) -> bool {
        matches!(
            self.target.as_str(),
            "normal" | "any" | "adjacentFoe" | "randomNormal"
        )
    }
}
