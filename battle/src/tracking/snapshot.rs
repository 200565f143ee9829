//! Building decision snapshots from an engine request plus memory

use anyhow::{Context, Result, bail};
use rival_protocol::{ActionRequest, CombatantView, MoveView, SideView, to_id};

use super::memory::BattleMemory;
use crate::types::{
    BattleState, CombatantSnapshot, FieldState, MoveCategory, MoveSlot, SideCondition, SideOwner,
    SideState, StatBlock, StatStages, Status, Type, Volatile,
};

impl MoveSlot {
    /// Convert an engine move. Accuracy arrives in percent; absent means it cannot miss.
    pub fn from_view(view: &MoveView) -> Self {
        let move_type = Type::from_protocol(&view.move_type).unwrap_or_else(|| {
            tracing::warn!(move_id = %view.id, move_type = %view.move_type, "Unknown move type");
            Type::Normal
        });
        let category = MoveCategory::from_protocol(&view.category).unwrap_or(MoveCategory::Status);

        Self {
            id: to_id(&view.id),
            move_type,
            category,
            power: view.power,
            accuracy: view.accuracy.map(|percent| percent / 100.0),
            pp: view.pp,
            priority: view.priority,
            disabled: view.disabled,
            target: view.target.clone(),
        }
    }
}

impl CombatantSnapshot {
    /// Build a snapshot from live state, overlaid with what memory knows
    pub fn from_view(view: &CombatantView, memory: &BattleMemory) -> Self {
        let types = view
            .types
            .iter()
            .filter_map(|name| {
                let parsed = Type::from_protocol(name);
                if parsed.is_none() {
                    tracing::warn!(identity = %view.id, type_name = %name, "Unknown type");
                }
                parsed
            })
            .collect();

        let mut snapshot = Self {
            identity: view.id.clone(),
            species: view.species.clone(),
            weight: view.weight,
            level: view.level,
            stats: StatBlock::new(
                view.stats.hp,
                view.stats.atk,
                view.stats.def,
                view.stats.spa,
                view.stats.spd,
                view.stats.spe,
            ),
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
            types,
            current_hp: view.hp.max(0.0),
            ability: to_id(&view.ability),
            item: view.item.as_deref().map(to_id).unwrap_or_default(),
            status: view.status.as_deref().and_then(Status::from_protocol),
            volatiles: view.volatiles.iter().map(|v| Volatile::from_protocol(v)).collect(),
            moves: view.moves.iter().map(MoveSlot::from_view).collect(),
            trapped: view.trapped,
            hits_taken: 0,
            disguise_broken: false,
            became_hero: false,
        };

        let Some(entry) = memory.entry(&view.id) else {
            return snapshot;
        };

        if let Some(copy) = &entry.transformation {
            snapshot.species = copy.species.clone();
            snapshot.weight = copy.weight;
            snapshot.stats = StatBlock {
                hp: snapshot.stats.hp,
                ..copy.stats
            };
            snapshot.types = copy.types.clone();
            snapshot.ability = copy.ability.clone();
            snapshot.boosts = copy.boosts;
        }
        if let Some(item) = &entry.item {
            snapshot.item = item.clone();
        }
        if let Some(ability) = &entry.ability {
            snapshot.ability = ability.clone();
        }
        snapshot.hits_taken = entry.hits_taken;
        snapshot.disguise_broken = entry.disguise_broken;
        snapshot.became_hero = entry.became_hero;
        snapshot
    }
}

impl SideState {
    /// Build one side. Hazards may repeat to stack layers.
    pub fn from_view(owner: SideOwner, view: &SideView, memory: &BattleMemory) -> Self {
        let active = view
            .active
            .as_ref()
            .filter(|a| !a.is_fainted())
            .map(|a| CombatantSnapshot::from_view(a, memory))
            .unwrap_or_else(CombatantSnapshot::empty);

        let reserves = view
            .available_switches()
            .into_iter()
            .map(|c| CombatantSnapshot::from_view(c, memory))
            .collect();

        let mut side = SideState::new(owner, active)
            .with_reserves(reserves)
            .with_deaths(memory.deaths(owner));
        side.tailwind = view.tailwind;

        for name in view.hazards.iter().chain(view.screens.iter()) {
            match SideCondition::from_protocol(name) {
                Some(cond) => {
                    side.add_condition(cond);
                }
                None => tracing::warn!(condition = %name, "Unknown side condition"),
            }
        }
        side
    }
}

impl BattleState {
    /// Build the full state for one decision
    pub fn from_request(request: &ActionRequest, memory: &BattleMemory) -> Result<Self> {
        let player = request
            .own_player()
            .with_context(|| format!("unknown side id {:?}", request.side))?;
        if player != memory.player() {
            bail!(
                "request is for {} but memory tracks {}",
                player.as_str(),
                memory.player().as_str()
            );
        }

        let field = FieldState::from_protocol(
            request.field.weather.as_deref(),
            request.field.terrain.as_deref(),
            request.field.trick_room,
        );

        Ok(BattleState::new(
            field,
            SideState::from_view(SideOwner::Own, &request.own, memory),
            SideState::from_view(SideOwner::Opponent, &request.opponent, memory),
        ))
    }
}
