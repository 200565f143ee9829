mod battle;
mod event;
mod request;

pub use battle::{Player, Pokemon, PokemonDetails, Stat, parse_details, parse_pokemon, to_id};
pub use request::{ActionRequest, BoostsView, CombatantView, FieldView, MoveView, SideView, StatsView};

use anyhow::Result;

/// Position of a line inside the battle log: which chunk it arrived in and its
/// line index within that chunk. Ordering follows the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EventId {
    pub chunk: u64,
    pub line: u32,
}

/// Battle-log events the decision engine cares about
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    /// |-item|POKEMON|ITEM
    ItemRevealed { pokemon: Pokemon, item: String },
    /// |-enditem|POKEMON|ITEM
    ItemEnded { pokemon: Pokemon },
    /// |-ability|POKEMON|ABILITY
    AbilityRevealed { pokemon: Pokemon, ability: String },
    /// |-endability|POKEMON
    AbilityEnded { pokemon: Pokemon },
    /// |-transform|POKEMON|TARGET
    Transformed { pokemon: Pokemon, target: Pokemon },
    /// |faint|POKEMON
    Faint(Pokemon),
    /// |detailschange|POKEMON|DETAILS
    DetailsChanged { pokemon: Pokemon, details: PokemonDetails },
    /// |-damage|POKEMON|HP STATUS, with `[from] EFFECT` for indirect damage
    Damage { pokemon: Pokemon, source: Option<String> },
    /// |move|POKEMON|MOVE|TARGET
    MoveUsed { pokemon: Pokemon, move_id: String },
}

impl BattleEvent {
    /// The combatant the event is about
    pub fn pokemon(&self) -> &Pokemon {
        match self {
            Self::ItemRevealed { pokemon, .. }
            | Self::ItemEnded { pokemon }
            | Self::AbilityRevealed { pokemon, .. }
            | Self::AbilityEnded { pokemon }
            | Self::Transformed { pokemon, .. }
            | Self::Faint(pokemon)
            | Self::DetailsChanged { pokemon, .. }
            | Self::Damage { pokemon, .. }
            | Self::MoveUsed { pokemon, .. } => pokemon,
        }
    }
}

/// An event tagged with its position in the log
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEvent {
    pub id: EventId,
    pub event: BattleEvent,
}

/// Parse one chunk of battle log (one turn's worth of lines) into events.
///
/// Lines that fail to parse are skipped with a warning so a single malformed
/// line never hides the rest of the turn.
pub fn parse_log_chunk(chunk: u64, text: &str) -> Vec<LoggedEvent> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| match parse_event_line(line) {
            Ok(Some(event)) => Some(LoggedEvent {
                id: EventId {
                    chunk,
                    line: index as u32,
                },
                event,
            }),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, line, "Skipping unparseable battle log line");
                None
            }
        })
        .collect()
}

/// Parse a single battle-log line. Lines of kinds the engine does not track
/// yield `Ok(None)`.
pub fn parse_event_line(line: &str) -> Result<Option<BattleEvent>> {
    let line = line.trim();

    if line.is_empty() || !line.starts_with('|') {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split('|').collect();

    if parts.len() < 2 {
        return Ok(None);
    }

    let event = match parts[1] {
        "-item" => event::parse_item(&parts)?,
        "-enditem" => event::parse_enditem(&parts)?,
        "-ability" => event::parse_ability(&parts)?,
        "-endability" => event::parse_endability(&parts)?,
        "-transform" => event::parse_transform(&parts)?,
        "faint" => event::parse_faint(&parts)?,
        "detailschange" => event::parse_detailschange(&parts)?,
        "-damage" => event::parse_damage(&parts)?,
        "move" => event::parse_move(&parts)?,
        _ => return Ok(None),
    };

    Ok(Some(event))
}
