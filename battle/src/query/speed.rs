//! Effective speed and move order

use super::damage::boosted_stats;
use crate::types::{CombatantSnapshot, FieldState, MoveSlot, SideState, Status, Terrain};

/// Resolves who moves first in a turn
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnOrderResolver;

impl TurnOrderResolver {
    /// Speed after stages, weather abilities, items, paralysis and tailwind
    pub fn effective_speed(field: &FieldState, side: &SideState, opponent: &CombatantSnapshot) -> f64 {
        let combatant = &side.active;
        let mut speed = boosted_stats(combatant, opponent).spe;

        let doubled = match combatant.ability.as_str() {
            "swiftswim" => field.is_rain(),
            "sandrush" => field.is_sand(),
            "chlorophyll" => field.is_sun(),
            "slushrush" => field.is_snow(),
            "surgesurfer" => field.terrain == Some(Terrain::Electric),
            _ => false,
        };
        if doubled {
            speed *= 2.0;
        }

        let quick_feet = combatant.ability == "quickfeet" && combatant.status.is_some();
        if quick_feet {
            speed *= 1.5;
        }

        match combatant.item.as_str() {
            "choicescarf" => speed *= 1.5,
            "ironball" => speed *= 0.5,
            _ => {}
        }

        if combatant.status == Some(Status::Paralysis) && !quick_feet {
            speed *= 0.5;
        }
        if side.tailwind {
            speed *= 2.0;
        }
        speed
    }

    /// Whether `side`'s active strictly outspeeds `other`'s active
    pub fn is_quicker(field: &FieldState, side: &SideState, other: &SideState) -> bool {
        Self::effective_speed(field, side, &other.active)
            > Self::effective_speed(field, other, &side.active)
    }

    /// Whether `side` acts before `other` given both chosen moves.
    ///
    /// Priority decides first. On equal priority the faster side wins, or the
    /// slower one under trick room; an exact speed tie is never a win.
    pub fn attacks_first(
        field: &FieldState,
        side: &SideState,
        side_move: Option<&MoveSlot>,
        other: &SideState,
        other_move: Option<&MoveSlot>,
    ) -> bool {
        let own_priority = side_move.map_or(0, |m| m.priority);
        let other_priority = other_move.map_or(0, |m| m.priority);
        if own_priority != other_priority {
            return own_priority > other_priority;
        }

        let own = Self::effective_speed(field, side, &other.active);
        let theirs = Self::effective_speed(field, other, &side.active);
        if field.trick_room {
            own < theirs
        } else {
            own > theirs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MoveCategory, SideOwner, StatBlock, StatStages, Type, Weather};

    fn side(owner: SideOwner, speed: f64) -> SideState {
        let combatant = CombatantSnapshot::new(
            "x",
            "x",
            StatBlock::new(100.0, 100.0, 100.0, 100.0, 100.0, speed),
        );
        SideState::new(owner, combatant)
    }

    fn opponent() -> CombatantSnapshot {
        CombatantSnapshot::new("o", "o", StatBlock::new(100.0, 100.0, 100.0, 100.0, 100.0, 100.0))
    }

    #[test]
    fn test_effective_speed_modifiers() {
        let field = FieldState::new();
        let base = side(SideOwner::Own, 100.0);
        assert_eq!(TurnOrderResolver::effective_speed(&field, &base, &opponent()), 100.0);

        let scarf = base.with_active(base.active.clone().with_item("choicescarf"));
        assert_eq!(TurnOrderResolver::effective_speed(&field, &scarf, &opponent()), 150.0);

        let para = base.with_active(base.active.clone().with_status(Status::Paralysis));
        assert_eq!(TurnOrderResolver::effective_speed(&field, &para, &opponent()), 50.0);

        let feet = base.with_active(
            base.active
                .clone()
                .with_status(Status::Paralysis)
                .with_ability("quickfeet"),
        );
        assert_eq!(TurnOrderResolver::effective_speed(&field, &feet, &opponent()), 150.0);

        let boosted = base.with_active(base.active.clone().with_boosts(StatStages {
            spe: 1,
            ..Default::default()
        }));
        assert_eq!(TurnOrderResolver::effective_speed(&field, &boosted, &opponent()), 150.0);

        let tail = base.clone().with_tailwind();
        assert_eq!(TurnOrderResolver::effective_speed(&field, &tail, &opponent()), 200.0);
    }

    #[test]
    fn test_weather_speed_abilities() {
        let base = side(SideOwner::Own, 100.0);
        let swimmer = base.with_active(base.active.clone().with_ability("swiftswim"));
        let rain = FieldState::new().with_weather(Weather::Rain);
        assert_eq!(TurnOrderResolver::effective_speed(&rain, &swimmer, &opponent()), 200.0);
        assert_eq!(
            TurnOrderResolver::effective_speed(&FieldState::new(), &swimmer, &opponent()),
            100.0
        );

        let surfer = base.with_active(base.active.clone().with_ability("surgesurfer"));
        let electric = FieldState::new().with_terrain(Terrain::Electric);
        assert_eq!(TurnOrderResolver::effective_speed(&electric, &surfer, &opponent()), 200.0);
    }

    #[test]
    fn test_priority_beats_speed() {
        let field = FieldState::new();
        let slow = side(SideOwner::Own, 50.0);
        let fast = side(SideOwner::Opponent, 150.0);
        let quick = MoveSlot::new("aquajet", Type::Water, MoveCategory::Physical, 40.0).with_priority(1);
        let normal = MoveSlot::new("surf", Type::Water, MoveCategory::Special, 90.0);

        assert!(TurnOrderResolver::attacks_first(&field, &slow, Some(&quick), &fast, Some(&normal)));
        assert!(!TurnOrderResolver::attacks_first(&field, &slow, Some(&normal), &fast, Some(&normal)));
        assert!(!TurnOrderResolver::attacks_first(&field, &slow, None, &fast, None));
    }

    #[test]
    fn test_trick_room_inverts_order() {
        let mut field = FieldState::new();
        field.trick_room = true;
        let slow = side(SideOwner::Own, 50.0);
        let fast = side(SideOwner::Opponent, 150.0);
        assert!(TurnOrderResolver::attacks_first(&field, &slow, None, &fast, None));
        assert!(!TurnOrderResolver::attacks_first(&field, &fast, None, &slow, None));
    }

    #[test]
    fn test_speed_tie_is_never_first() {
        let field = FieldState::new();
        let a = side(SideOwner::Own, 100.0);
        let b = side(SideOwner::Opponent, 100.0);
        assert!(!TurnOrderResolver::is_quicker(&field, &a, &b));
        assert!(!TurnOrderResolver::attacks_first(&field, &a, None, &b, None));
        assert!(!TurnOrderResolver::attacks_first(&field, &b, None, &a, None));

        let mut room = field;
        room.trick_room = true;
        assert!(!TurnOrderResolver::attacks_first(&room, &a, None, &b, None));
    }
}
