//! Short-horizon simulation of a one-on-one engagement

use rival_battle::query::entry_hazard_damage;
use rival_battle::{
    AttackContext, Catalog, CombatantSnapshot, DamageHeal, DamageModel, FieldState, MoveSlot,
    MoveValue, MultiHit, ResidualEffectsModel, SideOwner, SideState, TurnOrderResolver, Volatile,
};

use crate::selector::{MoveOptions, MoveSelector};

/// Result of simulating the two actives against each other
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementOutcome {
    /// Turns the own active survives, within 1..=horizon
    pub own_turns: u32,
    /// Turns the opponent's active survives, within 1..=horizon
    pub opponent_turns: u32,
    /// The opponent faints first
    pub own_wins: bool,
    pub own_quicker: bool,
    /// The opponent's most probable move on the first turn
    pub opponent_move: Option<MoveSlot>,
    /// Own move options on the first turn
    pub own_moves: MoveOptions,
}

impl EngagementOutcome {
    /// Whether own `mv` (or the best move) lands before the opponent's most probable move
    pub fn own_attacks_first(&self, mv: Option<&MoveSlot>) -> bool {
        let own_priority = mv.or(self.own_moves.best_move()).map_or(0, |m| m.priority);
        let opponent_priority = self.opponent_move.as_ref().map_or(0, |m| m.priority);
        if own_priority != opponent_priority {
            own_priority > opponent_priority
        } else {
            self.own_quicker
        }
    }
}

/// HP pools used only during a simulation
#[derive(Debug, Clone, Copy)]
struct ScratchHp {
    hp: f64,
    substitute: f64,
    disguise: f64,
}

impl ScratchHp {
    fn new(combatant: &CombatantSnapshot) -> Self {
        Self {
            hp: combatant.current_hp,
            substitute: if combatant.has_volatile(&Volatile::Substitute) {
                combatant.stats.hp / 4.0
            } else {
                0.0
            },
            disguise: if combatant.ability == "disguise" && !combatant.disguise_broken {
                1.0
            } else {
                0.0
            },
        }
    }
}

/// Who is still standing and who fell first
#[derive(Debug)]
struct Tally {
    own_alive: bool,
    opponent_alive: bool,
    first_fainted: Option<SideOwner>,
}

impl Tally {
    fn faint(&mut self, side: SideOwner) {
        self.first_fainted.get_or_insert(side);
        match side {
            SideOwner::Own => self.own_alive = false,
            SideOwner::Opponent => self.opponent_alive = false,
        }
    }
}

/// Plays out the two actives' exchange turn by turn
#[derive(Debug, Clone, Copy)]
pub struct ForwardSimulator<'a> {
    catalog: &'a Catalog,
    model: DamageModel<'a>,
    selector: MoveSelector<'a>,
    horizon: u32,
}

impl<'a> ForwardSimulator<'a> {
    pub fn new(catalog: &'a Catalog, horizon: u32) -> Self {
        let model = DamageModel::new(catalog);
        Self {
            catalog,
            model,
            selector: MoveSelector::new(model),
            horizon: horizon.max(1),
        }
    }

    pub fn selector(&self) -> &MoveSelector<'a> {
        &self.selector
    }

    /// Simulate the current actives. Reserves never come in.
    pub fn simulate(&self, field: &FieldState, own: &SideState, opponent: &SideState) -> EngagementOutcome {
        let own_quicker = TurnOrderResolver::is_quicker(field, own, opponent);
        // Equal speed leaves both sides slower
        let opponent_quicker = TurnOrderResolver::is_quicker(field, opponent, own);
        let mut own_hp = ScratchHp::new(&own.active);
        let mut opponent_hp = ScratchHp::new(&opponent.active);
        let mut tally = Tally {
            own_alive: true,
            opponent_alive: true,
            first_fainted: None,
        };

        // Either side may already be down, e.g. fainted to hazards on entry
        if own_hp.hp <= 0.0 {
            tally.faint(SideOwner::Own);
        }
        if opponent_hp.hp <= 0.0 {
            tally.faint(SideOwner::Opponent);
        }

        let mut own_turns = 0;
        let mut opponent_turns = 0;
        let mut first_turn: Option<(Option<MoveSlot>, MoveOptions)> = None;

        while (tally.own_alive || tally.opponent_alive)
            && own_turns < self.horizon
            && opponent_turns < self.horizon
        {
            if tally.own_alive {
                own_turns += 1;
            }
            if tally.opponent_alive {
                opponent_turns += 1;
            }

            let opponent_moves = self.selector.best_offensive_move(
                field,
                opponent,
                own,
                opponent_hp.hp,
                own_hp.hp,
                opponent_quicker,
                false,
            );
            let own_moves =
                self.selector
                    .best_offensive_move(field, own, opponent, own_hp.hp, opponent_hp.hp, own_quicker, false);

            let own_first = TurnOrderResolver::attacks_first(
                field,
                own,
                own_moves.best_move(),
                opponent,
                opponent_moves.best_move(),
            );

            if own_first {
                self.attack(own_moves.best.as_ref(), own, opponent, &mut own_hp, &mut opponent_hp, &mut tally);
                self.attack(opponent_moves.best.as_ref(), opponent, own, &mut opponent_hp, &mut own_hp, &mut tally);
            } else {
                self.attack(opponent_moves.best.as_ref(), opponent, own, &mut opponent_hp, &mut own_hp, &mut tally);
                self.attack(own_moves.best.as_ref(), own, opponent, &mut own_hp, &mut opponent_hp, &mut tally);
            }

            let own_residual = ResidualEffectsModel::end_of_turn(field, &own.active, &opponent.active);
            let opponent_residual = ResidualEffectsModel::end_of_turn(field, &opponent.active, &own.active);
            own_hp.hp -= own_residual.net();
            opponent_hp.hp -= opponent_residual.net();

            tracing::trace!(
                turn = own_turns.max(opponent_turns),
                own_move = ?own_moves.best_move().map(|m| &m.id),
                opponent_move = ?opponent_moves.best_move().map(|m| &m.id),
                own_hp = own_hp.hp,
                opponent_hp = opponent_hp.hp,
                "Simulated turn"
            );

            if own_hp.hp <= 0.0 && tally.own_alive {
                tally.faint(SideOwner::Own);
            }
            if opponent_hp.hp <= 0.0 && tally.opponent_alive {
                tally.faint(SideOwner::Opponent);
            }

            if first_turn.is_none() {
                first_turn = Some((opponent_moves.best_move().cloned(), own_moves));
            }
        }

        let (opponent_move, own_moves) = match first_turn {
            Some(first) => first,
            None => {
                let moves = self.selector.best_offensive_move(
                    field,
                    own,
                    opponent,
                    own_hp.hp,
                    opponent_hp.hp,
                    own_quicker,
                    false,
                );
                let reply = self.selector.best_offensive_move(
                    field,
                    opponent,
                    own,
                    opponent_hp.hp,
                    own_hp.hp,
                    opponent_quicker,
                    true,
                );
                (reply.best_move().cloned(), moves)
            }
        };

        let outcome = EngagementOutcome {
            own_turns: own_turns.max(1),
            opponent_turns: opponent_turns.max(1),
            own_wins: tally.first_fainted == Some(SideOwner::Opponent),
            own_quicker,
            opponent_move,
            own_moves,
        };
        tracing::debug!(
            own = %own.active.identity,
            opponent = %opponent.active.identity,
            own_turns = outcome.own_turns,
            opponent_turns = outcome.opponent_turns,
            own_wins = outcome.own_wins,
            "Simulated engagement"
        );
        outcome
    }

    /// Simulate after replacing one or both actives. A replacement takes entry
    /// hazards and, if given, `move_on_switch` from the other side's active,
    /// then a round of residuals applies before the exchange starts.
    pub fn simulate_with_switch(
        &self,
        field: &FieldState,
        own: &SideState,
        opponent: &SideState,
        own_replacement: Option<&CombatantSnapshot>,
        opponent_replacement: Option<&CombatantSnapshot>,
        move_on_switch: Option<&MoveSlot>,
    ) -> EngagementOutcome {
        let mut own = match own_replacement {
            Some(incoming) => own.with_active(incoming.clone()),
            None => own.clone(),
        };
        let mut opponent = match opponent_replacement {
            Some(incoming) => opponent.with_active(incoming.clone()),
            None => opponent.clone(),
        };

        if opponent_replacement.is_some() {
            let hit = self.switch_in_damage(field, &opponent, &own, move_on_switch);
            opponent.active.current_hp -= hit.damage;
            own.active.current_hp = (own.active.current_hp + hit.heal).min(own.active.stats.hp);
        }
        if own_replacement.is_some() {
            let hit = self.switch_in_damage(field, &own, &opponent, move_on_switch);
            own.active.current_hp -= hit.damage;
            opponent.active.current_hp = (opponent.active.current_hp + hit.heal).min(opponent.active.stats.hp);
        }

        let own_residual = ResidualEffectsModel::end_of_turn(field, &own.active, &opponent.active);
        let opponent_residual = ResidualEffectsModel::end_of_turn(field, &opponent.active, &own.active);
        own.active.current_hp -= own_residual.net();
        opponent.active.current_hp -= opponent_residual.net();

        self.simulate(field, &own, &opponent)
    }

    /// Hazards plus the incoming hit a combatant takes when switching in
    fn switch_in_damage(
        &self,
        field: &FieldState,
        switcher: &SideState,
        attacker: &SideState,
        incoming: Option<&MoveSlot>,
    ) -> DamageHeal {
        let hazards = entry_hazard_damage(switcher, &switcher.active);
        let hit = incoming.map_or(DamageHeal::ZERO, |mv| {
            self.model
                .expected(field, attacker, switcher, mv, &AttackContext::default())
        });
        DamageHeal::new(hazards + hit.damage, hit.heal)
    }

    /// Apply one move. Damage drains the substitute, then the disguise, then
    /// HP; the attacker's heal lands afterwards.
    fn attack(
        &self,
        mv: Option<&MoveValue>,
        attacker: &SideState,
        defender: &SideState,
        attacker_hp: &mut ScratchHp,
        defender_hp: &mut ScratchHp,
        tally: &mut Tally,
    ) {
        let Some(mv) = mv else {
            return;
        };
        let damage = mv.value.damage;
        let splits = self.catalog.splits_damage(&mv.slot.id);
        let was_full = defender_hp.hp >= defender.active.stats.hp;

        if defender_hp.substitute > 0.0 && attacker.active.ability != "infiltrator" {
            defender_hp.substitute -= damage;
            // Remaining hits of a multi-hit move carry through
            if defender_hp.substitute < 0.0 && splits {
                defender_hp.hp += defender_hp.substitute;
            }
        } else if defender_hp.disguise > 0.0 {
            defender_hp.disguise -= damage;
            if defender_hp.disguise < 0.0 {
                let carried = match self.catalog.multi_hit(&mv.slot.id) {
                    Some(MultiHit::Standard) => damage * 4.0 / 5.0,
                    Some(MultiHit::Double) => damage / 2.0,
                    Some(MultiHit::Triple) => damage * 2.0 / 3.0,
                    _ => 0.0,
                };
                defender_hp.hp -= carried;
            }
        } else {
            defender_hp.hp -= damage;
        }

        if was_full
            && defender_hp.hp <= 0.0
            && (defender.active.ability == "sturdy" || defender.active.item == "focussash")
            && !splits
        {
            defender_hp.hp = 1.0;
        }

        if defender_hp.hp <= 0.0 {
            let side = defender.owner;
            let alive = match side {
                SideOwner::Own => tally.own_alive,
                SideOwner::Opponent => tally.opponent_alive,
            };
            if alive {
                tally.faint(side);
            }
        }

        attacker_hp.hp = (attacker_hp.hp + mv.value.heal).min(attacker.active.stats.hp);
    }
}
