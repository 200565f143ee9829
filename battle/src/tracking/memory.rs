//! Battle-scoped memory of facts the live request does not carry

use std::collections::HashMap;

use rival_protocol::{ActionRequest, BattleEvent, CombatantView, EventId, LoggedEvent, Player, to_id};

use crate::types::{SideOwner, StatBlock, StatStages, Type};

/// Visible state copied from a transformation target
#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    pub species: String,
    pub weight: f64,
    /// Copied stats; HP is never taken from the target
    pub stats: StatBlock,
    pub types: Vec<Type>,
    pub ability: String,
    pub boosts: StatStages,
}

impl Transformation {
    fn from_view(view: &CombatantView) -> Self {
        Self {
            species: view.species.clone(),
            weight: view.weight,
            stats: StatBlock::new(
                view.stats.hp,
                view.stats.atk,
                view.stats.def,
                view.stats.spa,
                view.stats.spd,
                view.stats.spe,
            ),
            types: view.types.iter().filter_map(|t| Type::from_protocol(t)).collect(),
            ability: to_id(&view.ability),
            boosts: StatStages {
                atk: view.boosts.atk,
                def: view.boosts.def,
                spa: view.boosts.spa,
                spd: view.boosts.spd,
                spe: view.boosts.spe,
                accuracy: view.boosts.accuracy,
                evasion: view.boosts.evasion,
            }
            .clamped(),
        }
    }
}

/// What memory knows about one combatant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryEntry {
    /// Revealed item; `Some("")` once the item is gone
    pub item: Option<String>,
    /// Revealed ability; `Some("")` once it is suppressed
    pub ability: Option<String>,
    pub transformation: Option<Transformation>,
    pub disguise_broken: bool,
    pub became_hero: bool,
    /// Times hit by a direct attack this battle
    pub hits_taken: u32,
}

/// Memory for one battle, seen from one player's side.
///
/// Entries are created on first reference and live until the battle is
/// dropped. Events are applied at most once: anything at or before the
/// last applied [`EventId`] is ignored.
#[derive(Debug, Clone)]
pub struct BattleMemory {
    player: Player,
    entries: HashMap<String, MemoryEntry>,
    deaths: HashMap<SideOwner, u32>,
    last_moves: HashMap<SideOwner, String>,
    /// Last chunk a direct hit was counted in, per side
    last_hit_chunk: HashMap<SideOwner, u64>,
    high_water: Option<EventId>,
    previous_actives: HashMap<SideOwner, String>,
    /// Reserve queued by a pivot move for the next decision
    pub forced_switch: Option<String>,
}

impl BattleMemory {
    /// Create memory for the battle `player` is deciding in
    pub fn new(player: Player) -> Self {
        Self {
            player,
            entries: HashMap::new(),
            deaths: HashMap::new(),
            last_moves: HashMap::new(),
            last_hit_chunk: HashMap::new(),
            high_water: None,
            previous_actives: HashMap::new(),
            forced_switch: None,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Entry for an identity, if anything has been recorded
    pub fn entry(&self, identity: &str) -> Option<&MemoryEntry> {
        self.entries.get(identity)
    }

    fn entry_mut(&mut self, identity: &str) -> &mut MemoryEntry {
        self.entries.entry(identity.to_string()).or_default()
    }

    pub fn deaths(&self, side: SideOwner) -> u32 {
        self.deaths.get(&side).copied().unwrap_or(0)
    }

    pub fn last_move(&self, side: SideOwner) -> Option<&str> {
        self.last_moves.get(&side).map(String::as_str)
    }

    /// Active identity recorded after the previous decision
    pub fn previous_active(&self, side: SideOwner) -> Option<&str> {
        self.previous_actives.get(&side).map(String::as_str)
    }

    fn side_of(&self, player: Player) -> SideOwner {
        if player == self.player {
            SideOwner::Own
        } else {
            SideOwner::Opponent
        }
    }

    /// Apply a batch of log events. `request` supplies the visible state of
    /// transformation targets.
    pub fn observe(&mut self, events: &[LoggedEvent], request: &ActionRequest) {
        for logged in events {
            if self.high_water.is_some_and(|seen| logged.id <= seen) {
                continue;
            }
            self.high_water = Some(logged.id);
            self.apply(logged.id, &logged.event, request);
        }
    }

    fn apply(&mut self, id: EventId, event: &BattleEvent, request: &ActionRequest) {
        let identity = event.pokemon().name.as_str();
        let side = self.side_of(event.pokemon().player);

        match event {
            BattleEvent::ItemRevealed { item, .. } => {
                self.entry_mut(identity).item = Some(to_id(item));
            }
            BattleEvent::ItemEnded { .. } => {
                self.entry_mut(identity).item = Some(String::new());
            }
            BattleEvent::AbilityRevealed { ability, .. } => {
                self.entry_mut(identity).ability = Some(to_id(ability));
            }
            BattleEvent::AbilityEnded { .. } => {
                self.entry_mut(identity).ability = Some(String::new());
            }
            BattleEvent::Transformed { target, .. } => {
                let view = [&request.own, &request.opponent]
                    .into_iter()
                    .flat_map(|s| s.active.iter().chain(s.team.iter()))
                    .find(|c| c.id == target.name);
                match view {
                    Some(view) => {
                        self.entry_mut(identity).transformation = Some(Transformation::from_view(view));
                    }
                    None => {
                        tracing::warn!(identity, target = %target.name, "Transformation target not in request");
                    }
                }
            }
            BattleEvent::Faint(_) => {
                *self.deaths.entry(side).or_insert(0) += 1;
            }
            BattleEvent::DetailsChanged { details, .. } => {
                let entry = self.entry_mut(identity);
                match details.forme() {
                    Some("Busted") => entry.disguise_broken = true,
                    Some("Hero") => entry.became_hero = true,
                    _ => {}
                }
            }
            BattleEvent::Damage { source: None, .. } => {
                if self.last_hit_chunk.get(&side) != Some(&id.chunk) {
                    self.last_hit_chunk.insert(side, id.chunk);
                    self.entry_mut(identity).hits_taken += 1;
                }
            }
            BattleEvent::Damage { source: Some(_), .. } => {}
            BattleEvent::MoveUsed { move_id, .. } => {
                self.last_moves.insert(side, to_id(move_id));
            }
        }
    }

    /// Record the actives a decision was made against. A side whose active
    /// changed loses the ability override of the outgoing combatant.
    pub fn record_actives(&mut self, own: Option<&str>, opponent: Option<&str>) {
        for (side, current) in [(SideOwner::Own, own), (SideOwner::Opponent, opponent)] {
            let previous = match current {
                Some(identity) => self.previous_actives.insert(side, identity.to_string()),
                None => self.previous_actives.remove(&side),
            };
            let Some(previous) = previous else {
                continue;
            };
            if current != Some(previous.as_str()) {
                if let Some(entry) = self.entries.get_mut(&previous) {
                    entry.ability = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rival_protocol::parse_log_chunk;

    fn request() -> ActionRequest {
        ActionRequest::from_json(
            r#"{
                "side": "p1",
                "own": {"active": {"id": "ditto", "species": "Ditto",
                    "stats": {"hp": 200, "atk": 100, "def": 100, "spa": 100, "spd": 100, "spe": 100},
                    "hp": 200, "types": ["Normal"]}},
                "opponent": {"active": {"id": "garchomp", "species": "Garchomp", "weight": 95,
                    "stats": {"hp": 300, "atk": 260, "def": 190, "spa": 150, "spd": 170, "spe": 220},
                    "boosts": {"atk": 2}, "hp": 300, "types": ["Dragon", "Ground"], "ability": "Rough Skin"}}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_item_and_ability_reveals() {
        let mut memory = BattleMemory::new(Player::P1);
        let events = parse_log_chunk(
            1,
            "|-item|p2a: garchomp|Rocky Helmet\n|-ability|p2a: garchomp|Rough Skin",
        );
        memory.observe(&events, &request());
        let entry = memory.entry("garchomp").unwrap();
        assert_eq!(entry.item.as_deref(), Some("rockyhelmet"));
        assert_eq!(entry.ability.as_deref(), Some("roughskin"));

        let events = parse_log_chunk(2, "|-enditem|p2a: garchomp|Rocky Helmet");
        memory.observe(&events, &request());
        assert_eq!(memory.entry("garchomp").unwrap().item.as_deref(), Some(""));
    }

    #[test]
    fn test_observe_is_idempotent() {
        let mut memory = BattleMemory::new(Player::P1);
        let events = parse_log_chunk(1, "|-damage|p1a: ditto|50/200\n|faint|p2a: garchomp");
        memory.observe(&events, &request());
        memory.observe(&events, &request());

        assert_eq!(memory.deaths(SideOwner::Opponent), 1);
        assert_eq!(memory.deaths(SideOwner::Own), 0);
        assert_eq!(memory.entry("ditto").unwrap().hits_taken, 1);
    }

    #[test]
    fn test_hits_counted_once_per_chunk_and_only_direct() {
        let mut memory = BattleMemory::new(Player::P1);
        let events = parse_log_chunk(
            1,
            "|-damage|p1a: ditto|150/200\n|-damage|p1a: ditto|120/200\n|-damage|p1a: ditto|100/200|[from] Stealth Rock",
        );
        memory.observe(&events, &request());
        assert_eq!(memory.entry("ditto").unwrap().hits_taken, 1);

        let events = parse_log_chunk(2, "|-damage|p1a: ditto|80/200");
        memory.observe(&events, &request());
        assert_eq!(memory.entry("ditto").unwrap().hits_taken, 2);
    }

    #[test]
    fn test_transformation_copies_target() {
        let mut memory = BattleMemory::new(Player::P1);
        let events = parse_log_chunk(1, "|-transform|p1a: ditto|p2a: garchomp");
        memory.observe(&events, &request());

        let copy = memory.entry("ditto").unwrap().transformation.as_ref().unwrap();
        assert_eq!(copy.species, "Garchomp");
        assert_eq!(copy.stats.atk, 260.0);
        assert_eq!(copy.types, vec![Type::Dragon, Type::Ground]);
        assert_eq!(copy.ability, "roughskin");
        assert_eq!(copy.boosts.atk, 2);
    }

    #[test]
    fn test_form_changes() {
        let mut memory = BattleMemory::new(Player::P1);
        let events = parse_log_chunk(
            1,
            "|detailschange|p2a: mimikyu|Mimikyu-Busted\n|detailschange|p2a: palafin|Palafin-Hero",
        );
        memory.observe(&events, &request());
        assert!(memory.entry("mimikyu").unwrap().disguise_broken);
        assert!(memory.entry("palafin").unwrap().became_hero);
    }

    #[test]
    fn test_last_moves() {
        let mut memory = BattleMemory::new(Player::P1);
        let events = parse_log_chunk(1, "|move|p2a: garchomp|Destiny Bond|p1a: ditto");
        memory.observe(&events, &request());
        assert_eq!(memory.last_move(SideOwner::Opponent), Some("destinybond"));
        assert_eq!(memory.last_move(SideOwner::Own), None);
    }

    #[test]
    fn test_switch_clears_outgoing_ability() {
        let mut memory = BattleMemory::new(Player::P1);
        let events = parse_log_chunk(1, "|-ability|p2a: garchomp|Rough Skin");
        memory.observe(&events, &request());

        memory.record_actives(Some("ditto"), Some("garchomp"));
        assert!(memory.entry("garchomp").unwrap().ability.is_some());
        assert_eq!(memory.previous_active(SideOwner::Own), Some("ditto"));

        memory.record_actives(Some("ditto"), Some("gengar"));
        assert_eq!(memory.entry("garchomp").unwrap().ability, None);
        assert_eq!(memory.previous_active(SideOwner::Opponent), Some("gengar"));
    }
}
