//! Battle-log line parsers
//!
//! Each parser receives the line already split on `|`, so `parts[1]` is the
//! message kind and `parts[2]` the subject combatant.

use super::BattleEvent;
use super::battle::{parse_details, parse_pokemon, to_id};
use crate::ParseError;
use anyhow::Result;

fn parse_name(parts: &[&str], index: usize, field: &str) -> Result<String> {
    parts
        .get(index)
        .map(|s| to_id(s))
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::MissingField(field.to_string()).into())
}

/// Find a `[from] EFFECT` tag among the trailing parts
fn parse_from_tag(parts: &[&str], start: usize) -> Option<String> {
    parts
        .iter()
        .skip(start)
        .find_map(|p| p.strip_prefix("[from]"))
        .map(|s| s.trim().to_string())
}

/// Parse |-item|POKEMON|ITEM
pub fn parse_item(parts: &[&str]) -> Result<BattleEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let item = parse_name(parts, 3, "item")?;

    Ok(BattleEvent::ItemRevealed { pokemon, item })
}

/// Parse |-enditem|POKEMON|ITEM
pub fn parse_enditem(parts: &[&str]) -> Result<BattleEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    Ok(BattleEvent::ItemEnded { pokemon })
}

/// Parse |-ability|POKEMON|ABILITY
pub fn parse_ability(parts: &[&str]) -> Result<BattleEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let ability = parse_name(parts, 3, "ability")?;

    Ok(BattleEvent::AbilityRevealed { pokemon, ability })
}

/// Parse |-endability|POKEMON
pub fn parse_endability(parts: &[&str]) -> Result<BattleEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    Ok(BattleEvent::AbilityEnded { pokemon })
}

/// Parse |-transform|POKEMON|TARGET
pub fn parse_transform(parts: &[&str]) -> Result<BattleEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let target = parse_pokemon(parts, 3)?;

    Ok(BattleEvent::Transformed { pokemon, target })
}

/// Parse |faint|POKEMON
pub fn parse_faint(parts: &[&str]) -> Result<BattleEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    Ok(BattleEvent::Faint(pokemon))
}

/// Parse |detailschange|POKEMON|DETAILS
pub fn parse_detailschange(parts: &[&str]) -> Result<BattleEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let details = parse_details(parts, 3);

    if details.species.is_empty() {
        return Err(ParseError::MissingField("details".to_string()).into());
    }

    Ok(BattleEvent::DetailsChanged { pokemon, details })
}

/// Parse |-damage|POKEMON|HP STATUS|[from] EFFECT
pub fn parse_damage(parts: &[&str]) -> Result<BattleEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let source = parse_from_tag(parts, 4);

    Ok(BattleEvent::Damage { pokemon, source })
}

/// Parse |move|POKEMON|MOVE|TARGET
pub fn parse_move(parts: &[&str]) -> Result<BattleEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let move_id = parse_name(parts, 3, "move")?;

    Ok(BattleEvent::MoveUsed { pokemon, move_id })
}
