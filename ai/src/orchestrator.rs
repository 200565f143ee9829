//! One decision per engine request

use std::panic::{self, AssertUnwindSafe};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rival_battle::query::can_switch;
use rival_battle::{BattleMemory, BattleState, Catalog, MoveSlot, SideOwner, Status};
use rival_protocol::{Action, ActionRequest, LoggedEvent, Player, SideView};

use crate::config::AiConfig;
use crate::error::DecisionError;
use crate::simulator::ForwardSimulator;
use crate::switch::{SwitchAdvisor, SwitchDecision};
use crate::utility::UtilityAdvisor;

/// Receives notices meant for the battle's participants
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Logs notices instead of delivering them
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(notice = message, "Participant notice");
    }
}

/// Decides actions for one side of one battle.
///
/// Owns the battle's memory, so use one orchestrator per battle. Faults never
/// escape [`decide`](Self::decide): they become [`Action::Pass`] plus a
/// participant notice.
#[derive(Debug)]
pub struct DecisionOrchestrator<R: Rng = SmallRng, N: Notifier = TracingNotifier> {
    config: AiConfig,
    catalog: Catalog,
    memory: BattleMemory,
    rng: R,
    notifier: N,
}

impl DecisionOrchestrator {
    /// Create an orchestrator seeded from the OS
    pub fn new(player: Player, config: AiConfig) -> Self {
        Self::with_rng(player, config, SmallRng::from_entropy())
    }
}

impl<R: Rng> DecisionOrchestrator<R> {
    /// Create an orchestrator drawing from `rng`
    pub fn with_rng(player: Player, config: AiConfig, rng: R) -> Self {
        Self {
            config,
            catalog: Catalog::standard(),
            memory: BattleMemory::new(player),
            rng,
            notifier: TracingNotifier,
        }
    }
}

impl<R: Rng, N: Notifier> DecisionOrchestrator<R, N> {
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_notifier<M: Notifier>(self, notifier: M) -> DecisionOrchestrator<R, M> {
        DecisionOrchestrator {
            config: self.config,
            catalog: self.catalog,
            memory: self.memory,
            rng: self.rng,
            notifier,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn memory(&self) -> &BattleMemory {
        &self.memory
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fold `events` into memory and choose an action for `request`
    pub fn decide(&mut self, request: &ActionRequest, events: &[LoggedEvent]) -> Action {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.try_decide(request, events)));
        // Faulted decisions still see the actives change
        self.record_actives(request);
        match result {
            Ok(Ok(action)) => action,
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Decision failed, passing");
                self.notifier.notify(&self.config.fault_notice);
                Action::Pass
            }
            Err(_) => {
                tracing::error!("Decision panicked, passing");
                self.notifier.notify(&self.config.fault_notice);
                Action::Pass
            }
        }
    }

    fn try_decide(&mut self, request: &ActionRequest, events: &[LoggedEvent]) -> Result<Action, DecisionError> {
        self.memory.observe(events, request);
        let state = BattleState::from_request(request, &self.memory)?;

        let mut decider = Decider {
            config: &self.config,
            catalog: &self.catalog,
            memory: &mut self.memory,
            rng: &mut self.rng,
            request,
            state: &state,
        };
        let (action, branch) = decider.run()?;
        tracing::debug!(%action, branch, "Decision made");
        Ok(action)
    }

    fn record_actives(&mut self, request: &ActionRequest) {
        fn active(view: &SideView) -> Option<&str> {
            view.active
                .as_ref()
                .filter(|a| !a.is_fainted())
                .map(|a| a.id.as_str())
        }
        self.memory
            .record_actives(active(&request.own), active(&request.opponent));
    }
}

/// Borrowed state for one pass through the decision steps
struct Decider<'d, R> {
    config: &'d AiConfig,
    catalog: &'d Catalog,
    memory: &'d mut BattleMemory,
    rng: &'d mut R,
    request: &'d ActionRequest,
    state: &'d BattleState,
}

impl<R: Rng> Decider<'_, R> {
    /// The action and the name of the step that produced it
    fn run(&mut self) -> Result<(Action, &'static str), DecisionError> {
        let state = self.state;
        let (field, own, opponent) = (&state.field, &state.own, &state.opponent);

        let simulator = ForwardSimulator::new(self.catalog, self.config.horizon);
        let switches = SwitchAdvisor::new(self.catalog, simulator, self.config);
        let utility = UtilityAdvisor::new(self.catalog, self.config);

        if let Some(queued) = self.memory.forced_switch.take() {
            if own.find_reserve(&queued).is_some() {
                return Ok((Action::Switch(queued), "queued pivot switch"));
            }
            tracing::warn!(identity = %queued, "Queued switch target is no longer available");
        }

        if self.request.force_switch || own.active.is_empty() {
            let action = switches
                .empty_slot_switch(self.rng, field, own, opponent)
                .map_or(Action::Pass, Action::Switch);
            return Ok((action, "replacement"));
        }

        let outcome = simulator.simulate(field, own, opponent);
        let destiny_bond = self.memory.last_move(SideOwner::Opponent) == Some("destinybond") && !outcome.own_quicker;

        if outcome.own_wins && !destiny_bond {
            if let Some(killer) = outcome.own_moves.killers.choose(self.rng) {
                return Ok((self.use_move(killer)?, "guaranteed kill"));
            }
        }

        let switch_allowed = !own.reserves.is_empty() && can_switch(&own.active, &opponent.active);
        let decision = switches.decide_switch(self.rng, field, own, opponent, &outcome, false);

        if decision.urgent && switch_allowed {
            if let Some(action) = self.execute_switch(&decision)? {
                return Ok((action, "urgent switch"));
            }
        }

        if let Some(mv) = utility.choose(self.rng, field, own, opponent, &outcome, self.memory) {
            return Ok((self.use_move(&mv)?, "utility move"));
        }

        if switch_allowed {
            if let Some(action) = self.execute_switch(&decision)? {
                return Ok((action, "switch"));
            }
        }

        if destiny_bond {
            if let Some(mv) = outcome.own_moves.non_damaging.choose(self.rng) {
                return Ok((self.use_move(mv)?, "avoid destiny bond"));
            }
            if switch_allowed {
                let fallback = switches.decide_switch(self.rng, field, own, opponent, &outcome, true);
                if let Some(action) = self.execute_switch(&fallback)? {
                    return Ok((action, "avoid destiny bond"));
                }
            }
        }

        if let Some(best) = outcome.own_moves.best_move() {
            let asleep = own.active.status == Some(Status::Sleep);
            if asleep || self.rng.gen_bool(self.config.best_move_chance) {
                return Ok((self.use_move(best)?, "best move"));
            }
            let mv = outcome.own_moves.damaging.choose(self.rng).unwrap_or(best);
            return Ok((self.use_move(mv)?, "random damaging move"));
        }

        if switch_allowed {
            let fallback = switches.decide_switch(self.rng, field, own, opponent, &outcome, true);
            if let Some(action) = self.execute_switch(&fallback)? {
                return Ok((action, "fallback switch"));
            }
        }

        let enabled: Vec<&MoveSlot> = own.active.enabled_moves().collect();
        match enabled.choose(self.rng) {
            Some(mv) => Ok((self.use_move(mv)?, "random move")),
            None => Ok((Action::Pass, "nothing to do")),
        }
    }

    /// Switch now, or use the pivot move and queue the switch for the next call
    fn execute_switch(&mut self, decision: &SwitchDecision) -> Result<Option<Action>, DecisionError> {
        let Some(identity) = &decision.identity else {
            return Ok(None);
        };
        if self.state.own.find_reserve(identity).is_none() {
            return Err(DecisionError::InvalidSwitch(identity.clone()));
        }
        match &decision.pivot {
            Some(pivot) => {
                let action = self.use_move(pivot)?;
                self.memory.forced_switch = Some(identity.clone());
                Ok(Some(action))
            }
            None => Ok(Some(Action::Switch(identity.clone()))),
        }
    }

    /// Map a move onto the engine's move list, aimed at the opponent's slot
    /// when it targets a single foe
    fn use_move(&self, mv: &MoveSlot) -> Result<Action, DecisionError> {
        let view = self
            .request
            .find_move(&mv.id)
            .ok_or_else(|| DecisionError::MoveNotFound(mv.id.clone()))?;
        let target = if view.targets_opponent() {
            self.request.opponent.slot.clone()
        } else {
            None
        };
        Ok(Action::Move {
            id: view.id.clone(),
            target,
        })
    }
}
