//! Most probable offensive move for one side

use rival_battle::{
    AttackContext, DamageHeal, DamageModel, FieldState, MoveSlot, MoveValue, SideState, TurnOrderResolver,
};

/// A side's move options against one opponent, bucketed by outcome
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveOptions {
    /// Moves that knock the defender out before it can act
    pub killers: Vec<MoveSlot>,
    /// Moves with any positive damage or useful heal
    pub damaging: Vec<MoveSlot>,
    pub non_damaging: Vec<MoveSlot>,
    /// The chosen move and its value; `None` when no move is usable
    pub best: Option<MoveValue>,
}

impl MoveOptions {
    pub fn best_move(&self) -> Option<&MoveSlot> {
        self.best.as_ref().map(|b| &b.slot)
    }

    pub fn best_value(&self) -> DamageHeal {
        self.best.as_ref().map_or(DamageHeal::ZERO, |b| b.value)
    }
}

/// Picks the move a side is most likely to use to win a trade
#[derive(Debug, Clone, Copy)]
pub struct MoveSelector<'a> {
    model: DamageModel<'a>,
}

impl<'a> MoveSelector<'a> {
    pub fn new(model: DamageModel<'a>) -> Self {
        Self { model }
    }

    /// Classify the attacker's usable moves.
    ///
    /// Unless `ignore_reply` is set, the defender's own best move is estimated
    /// once (with replies ignored, so the lookahead stops there) to supply a
    /// flinch chance and the input of reply-dependent moves like Counter.
    #[allow(clippy::too_many_arguments)]
    pub fn best_offensive_move(
        &self,
        field: &FieldState,
        attacker: &SideState,
        defender: &SideState,
        attacker_hp: f64,
        defender_hp: f64,
        attacker_quicker: bool,
        ignore_reply: bool,
    ) -> MoveOptions {
        let mut options = MoveOptions {
            best: attacker.active.moves.first().map(|slot| MoveValue {
                slot: slot.clone(),
                value: DamageHeal::ZERO,
            }),
            ..Default::default()
        };

        let reply = if ignore_reply {
            None
        } else {
            let defender_quicker = TurnOrderResolver::is_quicker(field, defender, attacker);
            self.best_offensive_move(field, defender, attacker, defender_hp, attacker_hp, defender_quicker, true)
                .best
        };
        let ctx = AttackContext {
            attacker_first: attacker_quicker,
            flinch_chance: reply
                .as_ref()
                .map_or(0.0, |r| self.model.catalog().flinch(&r.slot.id)),
            reply: reply.as_ref(),
        };

        let missing_hp = (attacker.active.stats.hp - attacker_hp).max(0.0);
        let mut highest = DamageHeal::ZERO;

        for mv in attacker.active.enabled_moves() {
            let value = self.model.expected(field, attacker, defender, mv, &ctx);

            if (attacker_quicker || mv.priority > 0) && value.damage >= defender_hp {
                // The first killer found stays the pick
                if options.killers.is_empty() {
                    highest = value;
                    options.best = Some(MoveValue {
                        slot: mv.clone(),
                        value,
                    });
                }
                options.killers.push(mv.clone());
            }

            let effective_heal = value.heal.min(missing_hp);
            if value.damage + effective_heal > 0.0 {
                options.damaging.push(mv.clone());
            } else {
                options.non_damaging.push(mv.clone());
            }

            if options.killers.is_empty() && value.damage + effective_heal > highest.damage + highest.heal {
                highest = DamageHeal::new(value.damage, effective_heal);
                options.best = Some(MoveValue {
                    slot: mv.clone(),
                    value: highest,
                });
            }
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rival_battle::{Catalog, CombatantSnapshot, MoveCategory, SideOwner, StatBlock, Type};

    fn combatant(id: &str, moves: Vec<MoveSlot>) -> CombatantSnapshot {
        CombatantSnapshot::new(id, id, StatBlock::new(300.0, 100.0, 100.0, 100.0, 100.0, 100.0))
            .with_types(&[Type::Normal])
            .with_moves(moves)
    }

    fn physical(id: &str, power: f64) -> MoveSlot {
        MoveSlot::new(id, Type::Fighting, MoveCategory::Physical, power)
    }

    fn options(attacker: CombatantSnapshot, defender: CombatantSnapshot, defender_hp: f64, quicker: bool) -> MoveOptions {
        let catalog = Catalog::standard();
        let selector = MoveSelector::new(DamageModel::new(&catalog));
        let own = SideState::new(SideOwner::Own, attacker);
        let opp = SideState::new(SideOwner::Opponent, defender);
        selector.best_offensive_move(&FieldState::new(), &own, &opp, own.active.current_hp, defender_hp, quicker, false)
    }

    #[test]
    fn test_picks_highest_value() {
        let attacker = combatant(
            "a",
            vec![
                physical("weak", 40.0),
                physical("strong", 120.0),
                MoveSlot::status("growl", Type::Normal),
            ],
        );
        let defender = combatant("d", vec![physical("tackle", 40.0)]);
        let result = options(attacker, defender, 300.0, true);

        assert_eq!(result.best_move().map(|m| m.id.as_str()), Some("strong"));
        assert!(result.killers.is_empty());
        assert_eq!(result.damaging.len(), 2);
        assert_eq!(result.non_damaging.len(), 1);
        assert_eq!(result.non_damaging[0].id, "growl");
    }

    #[test]
    fn test_killer_needs_to_move_first() {
        let attacker = combatant("a", vec![physical("strike", 80.0)]);
        let defender = combatant("d", vec![physical("tackle", 40.0)]);

        let quick = options(attacker.clone(), defender.clone(), 10.0, true);
        assert_eq!(quick.killers.len(), 1);

        let slow = options(attacker.clone(), defender.clone(), 10.0, false);
        assert!(slow.killers.is_empty());

        let priority = combatant("a", vec![physical("machpunch", 40.0).with_priority(1)]);
        let result = options(priority, defender, 10.0, false);
        assert_eq!(result.killers.len(), 1);
    }

    #[test]
    fn test_heal_capped_at_missing_hp() {
        let drain = MoveSlot::new("drainpunch", Type::Fighting, MoveCategory::Physical, 75.0);
        let attacker = combatant("a", vec![drain]);
        let defender = combatant("d", vec![physical("tackle", 40.0)]);
        let result = options(attacker, defender, 300.0, true);
        // Full HP attacker gains nothing from draining
        assert_eq!(result.best_value().heal, 0.0);
        assert!(result.best_value().damage > 0.0);
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let attacker = combatant("a", vec![physical("first", 80.0), physical("second", 80.0)]);
        let defender = combatant("d", vec![physical("tackle", 40.0)]);

        let result = options(attacker.clone(), defender.clone(), 300.0, true);
        assert_eq!(result.best_move().map(|m| m.id.as_str()), Some("first"));
        assert!(result.killers.is_empty());

        let result = options(attacker, defender, 10.0, true);
        assert_eq!(result.killers.len(), 2);
        assert_eq!(result.best_move().map(|m| m.id.as_str()), Some("first"));
    }

    #[test]
    fn test_disabled_moves_skipped() {
        let attacker = combatant("a", vec![physical("strong", 120.0).disabled(), physical("weak", 40.0)]);
        let defender = combatant("d", vec![physical("tackle", 40.0)]);
        let result = options(attacker, defender, 300.0, true);
        assert_eq!(result.best_move().map(|m| m.id.as_str()), Some("weak"));
        assert_eq!(result.damaging.len(), 1);
    }

    #[test]
    fn test_no_moves() {
        let attacker = combatant("a", vec![]);
        let defender = combatant("d", vec![physical("tackle", 40.0)]);
        let result = options(attacker, defender, 300.0, true);
        assert!(result.best.is_none());
        assert_eq!(result.best_value(), DamageHeal::ZERO);
    }
}
