//! Matchup helpers for decision making

use crate::catalog::Catalog;
use crate::types::{
    CombatantSnapshot, FieldState, MoveSlot, SideCondition, SideState, Type, TypeChart, Volatile,
};

/// Check if a combatant touches the ground (hit by Ground moves, spikes and terrain)
pub fn is_grounded(combatant: &CombatantSnapshot) -> bool {
    !(combatant.has_type(Type::Flying)
        || combatant.ability == "levitate"
        || combatant.item == "airballoon")
}

/// Check if powder and spore moves fail against a combatant
pub fn is_powder_protected(combatant: &CombatantSnapshot) -> bool {
    combatant.has_type(Type::Grass)
        || combatant.item == "safetygoggles"
        || combatant.ability == "overcoat"
}

/// Check if two combatants share at least one type
pub fn shares_type(a: &CombatantSnapshot, b: &CombatantSnapshot) -> bool {
    a.types.iter().any(|t| b.has_type(*t))
}

/// Check if `combatant` is free to switch out while facing `opponent`
pub fn can_switch(combatant: &CombatantSnapshot, opponent: &CombatantSnapshot) -> bool {
    if combatant.trapped {
        return false;
    }
    let ghost = combatant.has_type(Type::Ghost);
    match opponent.ability.as_str() {
        "shadowtag" => combatant.ability == "shadowtag" || ghost,
        "arenatrap" => !is_grounded(combatant) || ghost,
        "magnetpull" => !combatant.has_type(Type::Steel) || ghost,
        _ => true,
    }
}

/// Check if a non-damaging move can take effect on `target` at all.
///
/// Reflected moves (Magic Bounce, Magic Coat), blocked moves (Substitute,
/// Good as Gold; entry hazards go through both) and targets that shrug
/// off statuses all read as unusable.
pub fn can_use_status_move(
    field: &FieldState,
    catalog: &Catalog,
    mv: &MoveSlot,
    target: &CombatantSnapshot,
) -> bool {
    if mv.is_status()
        && (target.ability == "magicbounce" || target.has_volatile(&Volatile::MagicCoat))
    {
        return false;
    }

    if !catalog.hazard_setters.contains_key(mv.id.as_str())
        && (target.has_volatile(&Volatile::Substitute) || target.ability == "goodasgold")
    {
        return false;
    }

    match target.ability.as_str() {
        "comatose" | "purifyingsalt" | "naturalcure" => false,
        "hydration" if field.is_rain() => false,
        "leafguard" if field.is_sun() => false,
        _ => true,
    }
}

/// Damage a combatant takes from entry hazards when it comes in on `side`
pub fn entry_hazard_damage(side: &SideState, combatant: &CombatantSnapshot) -> f64 {
    let max_hp = combatant.stats.hp;
    let mut damage = 0.0;

    if is_grounded(combatant) {
        damage += match side.condition_layers(SideCondition::Spikes) {
            1 => max_hp / 8.0,
            2 => max_hp / 6.0,
            3 => max_hp / 4.0,
            _ => 0.0,
        };
    }

    if side.has_condition(SideCondition::StealthRock) {
        damage += max_hp / 8.0 * TypeChart::effectiveness(Type::Rock, &combatant.types, "");
    }

    damage
}
