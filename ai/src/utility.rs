//! Non-attacking moves worth using this turn

use rand::Rng;
use rival_battle::query::{can_use_status_move, is_powder_protected};
use rival_battle::{
    AttackContext, BattleMemory, Catalog, CombatantSnapshot, DamageModel, FieldState, MoveSlot,
    ResidualEffectsModel, SideCondition, SideOwner, SideState, Status, TurnOrderResolver, Type,
    Volatile, Weather,
};

use crate::config::AiConfig;
use crate::simulator::EngagementOutcome;

/// Utility categories, in the order they are considered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtilityRule {
    FakeOut,
    Protect,
    AntiBoost,
    Wish,
    Taunt,
    Encore,
    Hazard,
    Screen,
    HazardRemoval,
    Recovery,
    Sacrifice,
    Substitute,
    ItemManipulation,
    Status,
    Volatile,
    Boost,
    BabyUnboost,
    DestinyBond,
}

impl UtilityRule {
    pub const ORDER: [UtilityRule; 18] = [
        UtilityRule::FakeOut,
        UtilityRule::Protect,
        UtilityRule::AntiBoost,
        UtilityRule::Wish,
        UtilityRule::Taunt,
        UtilityRule::Encore,
        UtilityRule::Hazard,
        UtilityRule::Screen,
        UtilityRule::HazardRemoval,
        UtilityRule::Recovery,
        UtilityRule::Sacrifice,
        UtilityRule::Substitute,
        UtilityRule::ItemManipulation,
        UtilityRule::Status,
        UtilityRule::Volatile,
        UtilityRule::Boost,
        UtilityRule::BabyUnboost,
        UtilityRule::DestinyBond,
    ];

    /// The first category a move falls in when used by `user`.
    ///
    /// Curse only curses when a ghost uses it; anyone else boosts.
    pub fn classify(catalog: &Catalog, mv: &MoveSlot, user: &CombatantSnapshot) -> Option<Self> {
        let id = mv.id.as_str();
        let rule = match id {
            "fakeout" => UtilityRule::FakeOut,
            _ if catalog.protect.contains(id) => UtilityRule::Protect,
            _ if catalog.anti_boost.contains(id) => UtilityRule::AntiBoost,
            "wish" => UtilityRule::Wish,
            "taunt" => UtilityRule::Taunt,
            "encore" => UtilityRule::Encore,
            _ if catalog.hazard_setters.contains_key(id) => UtilityRule::Hazard,
            _ if catalog.screen_moves.contains_key(id) => UtilityRule::Screen,
            _ if catalog.hazard_removal.contains(id) => UtilityRule::HazardRemoval,
            _ if catalog.self_recovery.contains(id) => UtilityRule::Recovery,
            _ if catalog.sacrifice.contains(id) => UtilityRule::Sacrifice,
            "substitute" => UtilityRule::Substitute,
            _ if catalog.item_manipulation.contains(id) => UtilityRule::ItemManipulation,
            _ if catalog.status_moves.contains_key(id) => UtilityRule::Status,
            "curse" if !user.has_type(Type::Ghost) => UtilityRule::Boost,
            _ if catalog.volatile_moves.contains_key(id) => UtilityRule::Volatile,
            _ if catalog.is_boost_move(id) => UtilityRule::Boost,
            _ if catalog.baby_unboost.contains(id) => UtilityRule::BabyUnboost,
            "destinybond" => UtilityRule::DestinyBond,
            _ => return None,
        };
        Some(rule)
    }
}

/// Everything a rule looks at for one decision
struct RuleContext<'s> {
    field: &'s FieldState,
    own: &'s SideState,
    opponent: &'s SideState,
    outcome: &'s EngagementOutcome,
    /// Turns the own active still gets to act
    expected_turns: u32,
    previous_own_move: Option<&'s str>,
    opponent_last_move: Option<&'s str>,
    previous_own_active: Option<&'s str>,
}

impl RuleContext<'_> {
    fn user(&self) -> &CombatantSnapshot {
        &self.own.active
    }

    fn target(&self) -> &CombatantSnapshot {
        &self.opponent.active
    }

    /// `mv` would be the last thing the own active does before fainting
    fn last_move_before_dying(&self, mv: &MoveSlot) -> bool {
        let first = TurnOrderResolver::attacks_first(
            self.field,
            self.own,
            Some(mv),
            self.opponent,
            self.outcome.opponent_move.as_ref(),
        );
        let turns = self.outcome.own_turns;
        (!first && turns == 2) || (first && turns == 1)
    }

    fn target_status_moves(&self) -> usize {
        self.target().moves.iter().filter(|m| m.is_status()).count()
    }

    fn user_wounded(&self) -> bool {
        self.user().current_hp < self.user().stats.hp
    }
}

/// Picks a non-attacking move from an ordered rule table
#[derive(Debug, Clone, Copy)]
pub struct UtilityAdvisor<'a> {
    catalog: &'a Catalog,
    model: DamageModel<'a>,
    config: &'a AiConfig,
}

impl<'a> UtilityAdvisor<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a AiConfig) -> Self {
        Self {
            catalog,
            model: DamageModel::new(catalog),
            config,
        }
    }

    /// The first utility move whose rule fires. Rules are tried in
    /// [`UtilityRule::ORDER`], moves within a rule in slot order.
    pub fn choose<R: Rng>(
        &self,
        rng: &mut R,
        field: &FieldState,
        own: &SideState,
        opponent: &SideState,
        outcome: &EngagementOutcome,
        memory: &BattleMemory,
    ) -> Option<MoveSlot> {
        let ctx = RuleContext {
            field,
            own,
            opponent,
            outcome,
            expected_turns: if outcome.own_quicker {
                outcome.own_turns
            } else {
                outcome.own_turns.saturating_sub(1)
            },
            previous_own_move: memory.last_move(SideOwner::Own),
            opponent_last_move: memory.last_move(SideOwner::Opponent),
            previous_own_active: memory.previous_active(SideOwner::Own),
        };

        let candidates: Vec<(UtilityRule, &MoveSlot)> = own
            .active
            .enabled_moves()
            .filter(|m| m.is_status() || self.catalog.offensive_utility.contains(m.id.as_str()))
            .filter_map(|m| UtilityRule::classify(self.catalog, m, &own.active).map(|rule| (rule, m)))
            .collect();

        for rule in UtilityRule::ORDER {
            for (_, mv) in candidates.iter().filter(|(r, _)| *r == rule) {
                if self.fires(rule, mv, &ctx, rng) {
                    tracing::debug!(rule = ?rule, move_id = %mv.id, "Utility move chosen");
                    return Some((*mv).clone());
                }
            }
        }
        None
    }

    fn fires<R: Rng>(&self, rule: UtilityRule, mv: &MoveSlot, ctx: &RuleContext<'_>, rng: &mut R) -> bool {
        match rule {
            UtilityRule::FakeOut => {
                !ctx.target().has_type(Type::Ghost)
                    && ctx.previous_own_active != Some(ctx.user().identity.as_str())
            }
            UtilityRule::Protect => self.protect(mv, ctx),
            UtilityRule::AntiBoost => self.anti_boost(mv, ctx),
            UtilityRule::Wish => ctx.previous_own_move != Some("wish") && ctx.expected_turns >= 1,
            UtilityRule::Taunt => {
                ctx.expected_turns >= 2
                    && !ctx.target().has_volatile(&Volatile::Taunt)
                    && self.usable(mv, ctx)
                    && ctx.target_status_moves() >= 2
            }
            UtilityRule::Encore => self.encore(mv, ctx, rng),
            UtilityRule::Hazard => self.hazard(mv, ctx),
            UtilityRule::Screen => self.screen(mv, ctx),
            UtilityRule::HazardRemoval => self.hazard_removal(mv, ctx),
            UtilityRule::Recovery => self.recovery(mv, ctx),
            UtilityRule::Sacrifice => {
                !ctx.own.reserves.is_empty() && ctx.last_move_before_dying(mv) && ctx.user_wounded()
            }
            UtilityRule::Substitute => self.substitute(ctx, rng),
            UtilityRule::ItemManipulation => self.item_manipulation(mv, ctx),
            UtilityRule::Status => self.status(mv, ctx, rng),
            UtilityRule::Volatile => self.volatile(mv, ctx, rng),
            UtilityRule::Boost => self.boost(mv, ctx, rng),
            UtilityRule::BabyUnboost => {
                let user = &ctx.user().boosts;
                let target = &ctx.target().boosts;
                user.all_below(4)
                    && ctx.expected_turns >= 2
                    && (user.atk as i32 + user.def as i32) - (target.atk as i32 + target.def as i32) < 1
            }
            UtilityRule::DestinyBond => {
                ctx.last_move_before_dying(mv)
                    && ctx.previous_own_move != Some("destinybond")
                    && rng.gen_bool(self.config.destiny_bond_chance)
            }
        }
    }

    fn usable(&self, mv: &MoveSlot, ctx: &RuleContext<'_>) -> bool {
        can_use_status_move(ctx.field, self.catalog, mv, ctx.target())
    }

    /// Shield when the opponent bleeds faster than we do, or to receive a wish
    fn protect(&self, mv: &MoveSlot, ctx: &RuleContext<'_>) -> bool {
        if ctx
            .previous_own_move
            .is_some_and(|prev| self.catalog.protect.contains(prev))
        {
            return false;
        }
        if mv.id == "kingsshield" || ctx.previous_own_move == Some("wish") {
            return true;
        }
        let theirs = ResidualEffectsModel::end_of_turn(ctx.field, ctx.target(), ctx.user()).net();
        let ours = ResidualEffectsModel::end_of_turn(ctx.field, ctx.user(), ctx.target()).net();
        theirs > ours
    }

    fn anti_boost(&self, mv: &MoveSlot, ctx: &RuleContext<'_>) -> bool {
        if ctx.target().boosts.total() < self.config.anti_boost_threshold {
            return false;
        }
        if self.catalog.low_priority_anti_boost.contains(mv.id.as_str()) {
            ctx.expected_turns >= 2 && !(mv.id == "dragontail" && ctx.target().has_type(Type::Fairy))
        } else {
            ctx.expected_turns >= 1
        }
    }

    fn encore<R: Rng>(&self, mv: &MoveSlot, ctx: &RuleContext<'_>, rng: &mut R) -> bool {
        let target = ctx.target();
        if ctx.expected_turns < 2
            || self.catalog.is_choice_item(&target.item)
            || target.has_volatile(&Volatile::Encore)
            || !self.usable(mv, ctx)
        {
            return false;
        }
        let last_was_status = ctx
            .opponent_last_move
            .and_then(|last| target.moves.iter().find(|m| m.id == last))
            .is_some_and(|m| m.is_status());

        (ctx.target_status_moves() >= 1 && rng.gen_bool(self.config.encore_chance))
            || (ctx.outcome.own_quicker
                && last_was_status
                && rng.gen_bool(self.config.encore_after_status_chance))
    }

    /// Lay a hazard up to its layer cap, unless the opponent can clear it
    fn hazard(&self, mv: &MoveSlot, ctx: &RuleContext<'_>) -> bool {
        if ctx.expected_turns < 1
            || !self.usable(mv, ctx)
            || ctx.target().has_move_in(&self.catalog.hazard_removal)
        {
            return false;
        }
        let Some(&hazard) = self.catalog.hazard_setters.get(mv.id.as_str()) else {
            return false;
        };
        let layers = ctx.opponent.condition_layers(hazard);
        match hazard {
            SideCondition::Spikes => layers < 3,
            SideCondition::ToxicSpikes => layers < 2,
            _ => layers == 0,
        }
    }

    /// Raise the screen that covers the opponent's stronger attacking stat
    fn screen(&self, mv: &MoveSlot, ctx: &RuleContext<'_>) -> bool {
        let Some(&screen) = self.catalog.screen_moves.get(mv.id.as_str()) else {
            return false;
        };
        if ctx.expected_turns < 1 || ctx.own.has_condition(screen) {
            return false;
        }
        let attacker = &ctx.target().stats;
        match screen {
            SideCondition::AuroraVeil => {
                ctx.field.is_snow() || ctx.field.weather == Some(Weather::Hail)
            }
            SideCondition::Reflect => attacker.atk > attacker.spa,
            SideCondition::LightScreen => attacker.spa > attacker.atk,
            _ => false,
        }
    }

    fn hazard_removal(&self, mv: &MoveSlot, ctx: &RuleContext<'_>) -> bool {
        if ctx.expected_turns < 1 || !ctx.own.has_hazards() {
            return false;
        }
        match mv.id.as_str() {
            "rapidspin" | "mortalspin" => !ctx.target().has_type(Type::Ghost),
            // Swapping sides would hand back their hazards and our screens
            "courtchange" => !ctx.opponent.has_hazards() && !ctx.own.has_screens(),
            _ => true,
        }
    }

    fn recovery(&self, mv: &MoveSlot, ctx: &RuleContext<'_>) -> bool {
        if ctx.expected_turns < 1 {
            return false;
        }
        if mv.id == "strengthsap" {
            let target = ctx.target();
            return target.stats.atk > target.stats.spa
                && (ctx.user().hp_fraction() < 0.7 || target.boosts.atk >= -1);
        }
        ctx.last_move_before_dying(mv) && ctx.user_wounded()
    }

    fn substitute<R: Rng>(&self, ctx: &RuleContext<'_>, rng: &mut R) -> bool {
        let user = ctx.user();
        let quarter = user.stats.hp / 4.0;
        if ctx.expected_turns < 2
            || user.has_volatile(&Volatile::Substitute)
            || user.current_hp <= quarter
        {
            return false;
        }
        if ctx.outcome.own_wins {
            return rng.gen_bool(self.config.substitute_when_winning_chance);
        }

        let weak_moves = ctx
            .target()
            .enabled_moves()
            .filter(|m| {
                self.model
                    .expected(ctx.field, ctx.opponent, ctx.own, m, &AttackContext::default())
                    .damage
                    < quarter
            })
            .count();
        let chance = (self.config.substitute_per_weak_move_chance * weak_moves as f64).min(1.0);
        chance > 0.0 && rng.gen_bool(chance)
    }

    /// Steal or remove the opponent's item; trade away our own choice item
    fn item_manipulation(&self, mv: &MoveSlot, ctx: &RuleContext<'_>) -> bool {
        let target = ctx.target();
        if ctx.expected_turns < 2 || !self.usable(mv, ctx) || !target.has_item() {
            return false;
        }
        match mv.id.as_str() {
            "trick" | "switcheroo" => {
                self.catalog.is_choice_item(&ctx.user().item) && !self.catalog.is_choice_item(&target.item)
            }
            _ => true,
        }
    }

    fn status<R: Rng>(&self, mv: &MoveSlot, ctx: &RuleContext<'_>, rng: &mut R) -> bool {
        let target = ctx.target();
        if ctx.expected_turns < 2 || target.status.is_some() || !self.usable(mv, ctx) {
            return false;
        }
        let Some(&status) = self.catalog.status_moves.get(mv.id.as_str()) else {
            return false;
        };
        let id = mv.id.as_str();
        let powder_blocked = matches!(id, "stunspore" | "sleeppowder" | "spore" | "poisonpowder")
            && is_powder_protected(target);

        let applicable = match status {
            Status::Burn => {
                !matches!(target.ability.as_str(), "waterveil" | "waterbubble" | "thermalexchange")
                    && !target.has_type(Type::Fire)
            }
            Status::Paralysis => {
                target.ability != "limber"
                    && !target.has_type(Type::Electric)
                    && !powder_blocked
                    && !(matches!(id, "thunderwave" | "nuzzle") && target.has_type(Type::Ground))
            }
            Status::Sleep => {
                !matches!(target.ability.as_str(), "insomnia" | "vitalspirit" | "sweetveil")
                    && !powder_blocked
                    && !(id == "yawn" && ctx.previous_own_move == Some("yawn"))
            }
            Status::Poison | Status::BadPoison => {
                !matches!(target.ability.as_str(), "immunity" | "pastelveil")
                    && (ctx.user().ability == "corrosion"
                        || !(target.has_type(Type::Poison) || target.has_type(Type::Steel)))
                    && !powder_blocked
            }
            Status::Freeze => false,
        };
        applicable && rng.gen_bool(self.config.status_move_chance)
    }

    fn volatile<R: Rng>(&self, mv: &MoveSlot, ctx: &RuleContext<'_>, rng: &mut R) -> bool {
        let target = ctx.target();
        if ctx.expected_turns < 2 || !self.usable(mv, ctx) {
            return false;
        }
        let applicable = match self.catalog.volatile_moves.get(mv.id.as_str()) {
            Some(Volatile::Confusion) => {
                !target.has_volatile(&Volatile::Confusion)
                    && target.ability != "owntempo"
                    && !(mv.id == "dynamicpunch" && target.has_type(Type::Ghost))
            }
            Some(Volatile::Curse) => {
                ctx.user().has_type(Type::Ghost) && !target.has_volatile(&Volatile::Curse)
            }
            Some(Volatile::LeechSeed) => {
                !target.has_type(Type::Grass) && !target.has_volatile(&Volatile::LeechSeed)
            }
            _ => false,
        };
        applicable && rng.gen_bool(self.config.volatile_move_chance)
    }

    /// Boost when there is time to use it, or when the stages we would raise
    /// trail the opponent's matching stages
    fn boost<R: Rng>(&self, mv: &MoveSlot, ctx: &RuleContext<'_>, rng: &mut R) -> bool {
        let user = ctx.user();
        let target = ctx.target();
        if ctx.expected_turns < 2
            || (mv.is_status() && user.has_volatile(&Volatile::Taunt))
            || ctx.outcome.own_turns <= 1
            || !user.boosts.all_below(6)
        {
            return false;
        }

        if ctx.outcome.own_turns >= self.config.turns_alive_to_boost
            && (!target.has_move_in(&self.catalog.anti_boost)
                || rng.gen_bool(self.config.boost_against_phazer_chance))
        {
            return true;
        }

        let Some(spread) = self.catalog.boosts(mv.id.as_str()) else {
            return false;
        };
        let (own, theirs) = (&user.boosts, &target.boosts);
        (spread.spe > 0 && (!ctx.outcome.own_quicker || own.spe <= 0))
            || (spread.atk > 0 && own.atk - theirs.def < 2)
            || (spread.spa > 0 && own.spa - theirs.spd < 2)
            || (spread.def > 0 && own.def - theirs.atk < 2)
            || (spread.spd > 0 && own.spd - theirs.spa < 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::MoveOptions;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rival_battle::{MoveCategory, Player, StatBlock, StatStages};
    use rival_protocol::{ActionRequest, parse_log_chunk};

    fn combatant(id: &str, moves: Vec<MoveSlot>) -> CombatantSnapshot {
        CombatantSnapshot::new(id, id, StatBlock::new(300.0, 120.0, 100.0, 80.0, 100.0, 100.0))
            .with_types(&[Type::Normal])
            .with_moves(moves)
    }

    fn status(id: &str) -> MoveSlot {
        MoveSlot::status(id, Type::Normal)
    }

    fn outcome(own_turns: u32, own_quicker: bool, own_wins: bool) -> EngagementOutcome {
        EngagementOutcome {
            own_turns,
            opponent_turns: 3,
            own_wins,
            own_quicker,
            opponent_move: Some(MoveSlot::new("tackle", Type::Normal, MoveCategory::Physical, 40.0)),
            own_moves: MoveOptions::default(),
        }
    }

    fn always() -> AiConfig {
        AiConfig {
            status_move_chance: 1.0,
            volatile_move_chance: 1.0,
            encore_chance: 1.0,
            destiny_bond_chance: 1.0,
            ..AiConfig::default()
        }
    }

    fn choose_with(
        config: &AiConfig,
        own: &SideState,
        opponent: &SideState,
        outcome: &EngagementOutcome,
        memory: &BattleMemory,
        seed: u64,
    ) -> Option<String> {
        let catalog = Catalog::standard();
        let advisor = UtilityAdvisor::new(&catalog, config);
        let mut rng = SmallRng::seed_from_u64(seed);
        advisor
            .choose(&mut rng, &FieldState::new(), own, opponent, outcome, memory)
            .map(|m| m.id)
    }

    fn choose(own: CombatantSnapshot, opponent: CombatantSnapshot, outcome: &EngagementOutcome) -> Option<String> {
        let own = SideState::new(SideOwner::Own, own);
        let opponent = SideState::new(SideOwner::Opponent, opponent);
        choose_with(&always(), &own, &opponent, outcome, &BattleMemory::new(Player::P1), 7)
    }

    fn memory_after(log: &str) -> BattleMemory {
        let mut memory = BattleMemory::new(Player::P1);
        let request = ActionRequest::from_json(r#"{"side": "p1", "own": {}, "opponent": {}}"#).unwrap();
        memory.observe(&parse_log_chunk(1, log), &request);
        memory
    }

    #[test]
    fn test_classify_follows_rule_order() {
        let catalog = Catalog::standard();
        let normal = combatant("n", vec![]);
        let ghost = combatant("g", vec![]).with_types(&[Type::Ghost]);

        assert_eq!(UtilityRule::classify(&catalog, &status("protect"), &normal), Some(UtilityRule::Protect));
        // Tidy Up clears hazards before it counts as a boost
        assert_eq!(UtilityRule::classify(&catalog, &status("tidyup"), &normal), Some(UtilityRule::HazardRemoval));
        assert_eq!(UtilityRule::classify(&catalog, &status("curse"), &normal), Some(UtilityRule::Boost));
        assert_eq!(UtilityRule::classify(&catalog, &status("curse"), &ghost), Some(UtilityRule::Volatile));
        assert_eq!(UtilityRule::classify(&catalog, &status("splash"), &normal), None);
    }

    #[test]
    fn test_capped_hazards_never_chosen() {
        let own = SideState::new(SideOwner::Own, combatant("own", vec![status("spikes")]));
        let bare = SideState::new(SideOwner::Opponent, combatant("opp", vec![]));
        let memory = BattleMemory::new(Player::P1);
        let config = always();

        assert_eq!(
            choose_with(&config, &own, &bare, &outcome(5, true, true), &memory, 1),
            Some("spikes".to_string())
        );

        let mut covered = bare.clone();
        for _ in 0..3 {
            covered.add_condition(SideCondition::Spikes);
        }
        for seed in 0..50 {
            assert_eq!(choose_with(&config, &own, &covered, &outcome(5, true, true), &memory, seed), None);
        }
    }

    #[test]
    fn test_hazard_skipped_against_removal() {
        let own = combatant("own", vec![status("stealthrock")]);
        let spinner = combatant(
            "opp",
            vec![MoveSlot::new("rapidspin", Type::Normal, MoveCategory::Physical, 50.0)],
        );
        assert_eq!(choose(own, spinner, &outcome(5, true, true)), None);
    }

    #[test]
    fn test_rules_beat_slot_order() {
        let own = combatant("own", vec![status("swordsdance"), status("stealthrock")]);
        let opponent = combatant("opp", vec![]);
        assert_eq!(choose(own, opponent, &outcome(5, true, true)), Some("stealthrock".to_string()));
    }

    #[test]
    fn test_fake_out_only_on_entry() {
        let fakeout = MoveSlot::new("fakeout", Type::Normal, MoveCategory::Physical, 40.0).with_priority(3);
        let own = SideState::new(SideOwner::Own, combatant("own", vec![fakeout.clone()]));
        let opponent = SideState::new(SideOwner::Opponent, combatant("opp", vec![]));
        let config = always();

        let mut memory = BattleMemory::new(Player::P1);
        assert_eq!(
            choose_with(&config, &own, &opponent, &outcome(3, true, true), &memory, 1),
            Some("fakeout".to_string())
        );

        memory.record_actives(Some("own"), Some("opp"));
        assert_eq!(choose_with(&config, &own, &opponent, &outcome(3, true, true), &memory, 1), None);

        let ghost = opponent.with_active(combatant("opp", vec![]).with_types(&[Type::Ghost]));
        let fresh = BattleMemory::new(Player::P1);
        assert_eq!(choose_with(&config, &own, &ghost, &outcome(3, true, true), &fresh, 1), None);
    }

    #[test]
    fn test_protect_not_twice_in_a_row() {
        let own = SideState::new(SideOwner::Own, combatant("own", vec![status("kingsshield")]));
        let opponent = SideState::new(SideOwner::Opponent, combatant("opp", vec![]));
        let config = always();

        let fresh = BattleMemory::new(Player::P1);
        assert_eq!(
            choose_with(&config, &own, &opponent, &outcome(3, true, true), &fresh, 1),
            Some("kingsshield".to_string())
        );

        let after_protect = memory_after("|move|p1a: own|King's Shield|p2a: opp");
        assert_eq!(choose_with(&config, &own, &opponent, &outcome(3, true, true), &after_protect, 1), None);
    }

    #[test]
    fn test_protect_when_opponent_bleeds() {
        let own = combatant("own", vec![status("protect")]);
        let healthy = combatant("opp", vec![]);
        assert_eq!(choose(own.clone(), healthy.clone(), &outcome(3, true, true)), None);

        let burned = healthy.with_status(Status::Burn);
        assert_eq!(choose(own, burned, &outcome(3, true, true)), Some("protect".to_string()));
    }

    #[test]
    fn test_anti_boost_threshold() {
        let own = combatant("own", vec![status("haze")]);
        let calm = combatant("opp", vec![]);
        assert_eq!(choose(own.clone(), calm.clone(), &outcome(3, true, true)), None);

        let boosted = calm.with_boosts(StatStages {
            atk: 2,
            ..Default::default()
        });
        assert_eq!(choose(own, boosted, &outcome(3, true, true)), Some("haze".to_string()));
    }

    #[test]
    fn test_status_immunities() {
        let own = combatant("own", vec![status("toxic")]);
        let steel = combatant("opp", vec![]).with_types(&[Type::Steel]);
        assert_eq!(choose(own.clone(), steel.clone(), &outcome(4, true, true)), None);

        let corrosive = own.clone().with_ability("corrosion");
        assert_eq!(choose(corrosive, steel, &outcome(4, true, true)), Some("toxic".to_string()));

        let statused = combatant("opp", vec![]).with_status(Status::Paralysis);
        assert_eq!(choose(own.clone(), statused, &outcome(4, true, true)), None);

        // Too few turns left to profit
        assert_eq!(choose(own, combatant("opp", vec![]), &outcome(2, false, true)), None);
    }

    #[test]
    fn test_thunder_wave_misses_ground() {
        let own = combatant("own", vec![MoveSlot::status("thunderwave", Type::Electric)]);
        let ground = combatant("opp", vec![]).with_types(&[Type::Ground]);
        assert_eq!(choose(own.clone(), ground, &outcome(4, true, true)), None);
        assert_eq!(
            choose(own, combatant("opp", vec![]), &outcome(4, true, true)),
            Some("thunderwave".to_string())
        );
    }

    #[test]
    fn test_leech_seed_skips_grass() {
        let own = combatant("own", vec![MoveSlot::status("leechseed", Type::Grass)]);
        let grass = combatant("opp", vec![]).with_types(&[Type::Grass]);
        assert_eq!(choose(own.clone(), grass, &outcome(4, true, true)), None);
        assert_eq!(
            choose(own, combatant("opp", vec![]), &outcome(4, true, true)),
            Some("leechseed".to_string())
        );
    }

    #[test]
    fn test_boost_needs_time() {
        let own = combatant("own", vec![status("swordsdance")]);
        let opponent = combatant("opp", vec![]);
        assert_eq!(choose(own.clone(), opponent.clone(), &outcome(5, true, true)), Some("swordsdance".to_string()));
        assert_eq!(choose(own.clone(), opponent.clone(), &outcome(1, true, true)), None);

        let maxed = own.with_boosts(StatStages {
            atk: 6,
            ..Default::default()
        });
        assert_eq!(choose(maxed, opponent, &outcome(5, true, true)), None);
    }

    #[test]
    fn test_screen_matches_opponent_offense() {
        let own = combatant("own", vec![status("reflect"), status("lightscreen")]);
        let physical = combatant("opp", vec![]);
        assert_eq!(choose(own.clone(), physical, &outcome(3, true, true)), Some("reflect".to_string()));

        let special = CombatantSnapshot::new("opp", "opp", StatBlock::new(300.0, 60.0, 100.0, 140.0, 100.0, 100.0));
        assert_eq!(choose(own, special, &outcome(3, true, true)), Some("lightscreen".to_string()));
    }

    #[test]
    fn test_destiny_bond_on_last_turn() {
        let own = combatant("own", vec![status("destinybond")]);
        let opponent = combatant("opp", vec![]);
        // Speeds tie, so the opponent's hit lands first and two turns means this is the last
        assert_eq!(choose(own.clone(), opponent.clone(), &outcome(2, true, false)), Some("destinybond".to_string()));
        assert_eq!(choose(own, opponent, &outcome(4, true, false)), None);
    }

    #[test]
    fn test_seeded_choice_is_reproducible() {
        let own = SideState::new(SideOwner::Own, combatant("own", vec![status("substitute"), status("toxic")]));
        let opponent = SideState::new(SideOwner::Opponent, combatant("opp", vec![]));
        let memory = BattleMemory::new(Player::P1);
        let config = AiConfig::default();
        for seed in 0..20 {
            let first = choose_with(&config, &own, &opponent, &outcome(4, true, true), &memory, seed);
            let second = choose_with(&config, &own, &opponent, &outcome(4, true, true), &memory, seed);
            assert_eq!(first, second);
        }
    }
}
