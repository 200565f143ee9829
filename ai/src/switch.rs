//! Whether, and to whom, to switch

use rand::Rng;
use rand::seq::SliceRandom;
use rival_battle::query::{resolved_move_type, type_multiplier};
use rival_battle::{AttackContext, Catalog, CombatantSnapshot, DamageModel, FieldState, MoveSlot, SideState};

use crate::config::AiConfig;
use crate::simulator::{EngagementOutcome, ForwardSimulator};

/// A switch recommendation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchDecision {
    /// Reserve to bring in; `None` means stay in
    pub identity: Option<String>,
    /// Pivot move to use first, switching on the next decision
    pub pivot: Option<MoveSlot>,
    /// Switch before considering anything else
    pub urgent: bool,
}

impl SwitchDecision {
    pub fn stay() -> Self {
        Self::default()
    }

    fn to(identity: String, pivot: Option<MoveSlot>, urgent: bool) -> Self {
        Self {
            identity: Some(identity),
            pivot,
            urgent,
        }
    }

    pub fn is_switch(&self) -> bool {
        self.identity.is_some()
    }
}

/// Searches reserves for a better matchup
#[derive(Debug, Clone, Copy)]
pub struct SwitchAdvisor<'a> {
    catalog: &'a Catalog,
    model: DamageModel<'a>,
    simulator: ForwardSimulator<'a>,
    config: &'a AiConfig,
}

impl<'a> SwitchAdvisor<'a> {
    pub fn new(catalog: &'a Catalog, simulator: ForwardSimulator<'a>, config: &'a AiConfig) -> Self {
        Self {
            catalog,
            model: DamageModel::new(catalog),
            simulator,
            config,
        }
    }

    /// Walk the switch cascade for the current engagement. `forced` falls
    /// back to any reserve when nothing better turns up.
    pub fn decide_switch<R: Rng>(
        &self,
        rng: &mut R,
        field: &FieldState,
        own: &SideState,
        opponent: &SideState,
        outcome: &EngagementOutcome,
        forced: bool,
    ) -> SwitchDecision {
        if own.active.is_empty() && opponent.active.is_empty() {
            return random_reserve(rng, own)
                .map_or_else(SwitchDecision::stay, |id| SwitchDecision::to(id, None, false));
        }

        let user = &own.active;
        let pivot = self.should_use_pivot(field, own, opponent, outcome);

        // Unanswered boosts
        if opponent.active.boosts.total() > 0 && !user.has_move_in(&self.catalog.anti_boost) {
            let answers: Vec<&CombatantSnapshot> = own
                .reserves
                .iter()
                .filter(|r| r.has_move_in(&self.catalog.anti_boost))
                .filter(|r| {
                    let result = self.simulator.simulate_with_switch(
                        field,
                        own,
                        opponent,
                        Some(r),
                        None,
                        outcome.opponent_move.as_ref(),
                    );
                    result.own_turns > 1 || result.own_quicker
                })
                .collect();
            if let Some(answer) = answers.choose(rng) {
                tracing::debug!(identity = %answer.identity, "Switching to answer boosts");
                return SwitchDecision::to(answer.identity.clone(), pivot, true);
            }
        }

        // Zero to Hero only transforms on the way out
        if user.ability == "zerotohero" && !user.became_hero {
            let identity = self
                .winning_switch(rng, field, own, opponent, outcome, |_| true)
                .or_else(|| random_reserve(rng, own));
            if let Some(identity) = identity {
                return SwitchDecision::to(identity, None, false);
            }
        }

        if user.has_move("shedtail") {
            let boosters = self.winning_switch(rng, field, own, opponent, outcome, |r| {
                r.moves.iter().any(|m| self.catalog.is_boost_move(&m.id))
            });
            let identity = boosters.or_else(|| self.winning_switch(rng, field, own, opponent, outcome, |_| true));
            if let (Some(identity), Some(_)) = (&identity, &pivot) {
                return SwitchDecision::to(identity.clone(), pivot, false);
            }
        }

        if user.has_move_in(&self.catalog.pivot) {
            let identity = self.winning_switch(rng, field, own, opponent, outcome, |_| true);
            if let (Some(identity), Some(_)) = (identity, &pivot) {
                if rng.gen_bool(self.config.pivot_switch_chance) {
                    return SwitchDecision::to(identity, pivot, false);
                }
            }
        }

        if !outcome.own_wins {
            if let Some(identity) = self.winning_switch(rng, field, own, opponent, outcome, |_| true) {
                tracing::debug!(%identity, "Switching out of a losing engagement");
                return SwitchDecision::to(identity, pivot, false);
            }
        }

        if forced {
            if let Some(identity) = random_reserve(rng, own) {
                return SwitchDecision::to(identity, None, false);
            }
        }
        SwitchDecision::stay()
    }

    /// A random reserve that wins its engagement after coming in on the
    /// opponent's most probable move
    fn winning_switch<R: Rng>(
        &self,
        rng: &mut R,
        field: &FieldState,
        own: &SideState,
        opponent: &SideState,
        outcome: &EngagementOutcome,
        eligible: impl Fn(&CombatantSnapshot) -> bool,
    ) -> Option<String> {
        let winners: Vec<&CombatantSnapshot> = own
            .reserves
            .iter()
            .filter(|r| eligible(r))
            .filter(|r| {
                self.simulator
                    .simulate_with_switch(field, own, opponent, Some(r), None, outcome.opponent_move.as_ref())
                    .own_wins
            })
            .collect();
        winners.choose(rng).map(|r| r.identity.clone())
    }

    /// The pivot move to leave with, if it gets off safely
    pub fn should_use_pivot(
        &self,
        field: &FieldState,
        own: &SideState,
        opponent: &SideState,
        outcome: &EngagementOutcome,
    ) -> Option<MoveSlot> {
        let user = &own.active;
        let target = &opponent.active;
        let mv = user
            .enabled_moves()
            .find(|m| self.catalog.pivot.contains(m.id.as_str()))?;

        let usable = match mv.id.as_str() {
            "teleport" => outcome.own_turns >= 2,
            "shedtail" => {
                let half = user.stats.hp / 2.0;
                let incoming = outcome.opponent_move.as_ref().map_or(0.0, |reply| {
                    let ctx = AttackContext {
                        attacker_first: true,
                        ..AttackContext::default()
                    };
                    self.model.expected(field, opponent, own, reply, &ctx).damage
                });
                user.current_hp > half
                    && (outcome.own_attacks_first(Some(mv)) || user.current_hp - incoming > half)
            }
            id => {
                (outcome.own_attacks_first(Some(mv)) || outcome.own_turns >= 2)
                    && match id {
                        _ if self.catalog.offensive_pivot.contains(id) => {
                            type_multiplier(user, target, resolved_move_type(field, mv)) > 0.0
                        }
                        "partingshot" => !matches!(target.ability.as_str(), "soundproof" | "goodasgold"),
                        _ => true,
                    }
            }
        };
        usable.then(|| mv.clone())
    }

    /// Replacement for an empty own slot. Prefers a reserve that wins
    /// against the opponent's active.
    pub fn empty_slot_switch<R: Rng>(
        &self,
        rng: &mut R,
        field: &FieldState,
        own: &SideState,
        opponent: &SideState,
    ) -> Option<String> {
        if opponent.active.is_empty() {
            return random_reserve(rng, own);
        }
        let winners: Vec<&CombatantSnapshot> = own
            .reserves
            .iter()
            .filter(|r| {
                self.simulator
                    .simulate_with_switch(field, own, opponent, Some(r), None, None)
                    .own_wins
            })
            .collect();
        winners
            .choose(rng)
            .map(|r| r.identity.clone())
            .or_else(|| random_reserve(rng, own))
    }
}

fn random_reserve<R: Rng>(rng: &mut R, side: &SideState) -> Option<String> {
    side.reserves.choose(rng).map(|r| r.identity.clone())
}
