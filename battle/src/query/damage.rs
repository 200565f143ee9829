//! Expected damage and heal of a single move

use rival_protocol::to_id;

use super::matchup::{is_grounded, shares_type};
use crate::catalog::{Catalog, MultiHit};
use crate::types::{
    CombatantSnapshot, FieldState, MoveCategory, MoveSlot, SideCondition, SideState, StatBlock,
    StatStages, Status, Terrain, Type, TypeChart, Volatile, Weather,
};

/// Expected damage dealt and HP restored to the user
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DamageHeal {
    pub damage: f64,
    pub heal: f64,
}

impl DamageHeal {
    pub const ZERO: DamageHeal = DamageHeal {
        damage: 0.0,
        heal: 0.0,
    };

    pub fn new(damage: f64, heal: f64) -> Self {
        Self { damage, heal }
    }

    /// Damage minus heal
    pub fn net(&self) -> f64 {
        self.damage - self.heal
    }
}

/// A move together with its expected value
#[derive(Debug, Clone, PartialEq)]
pub struct MoveValue {
    pub slot: MoveSlot,
    pub value: DamageHeal,
}

/// Situation a move is used in
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackContext<'a> {
    /// The attacker acts before the defender this turn
    pub attacker_first: bool,
    /// Chance the defender's own move flinches the attacker
    pub flinch_chance: f64,
    /// The defender's expected move this turn, if known
    pub reply: Option<&'a MoveValue>,
}

/// Stats after stage multipliers and the opponent's stat-lowering abilities.
///
/// An Unaware opponent sees raw stats. The Ruin abilities lower one stat of
/// everything except a holder of the same ability.
pub fn boosted_stats(combatant: &CombatantSnapshot, opponent: &CombatantSnapshot) -> StatBlock {
    if opponent.ability == "unaware" {
        return combatant.stats;
    }

    let ruin = |ability: &str| {
        if opponent.ability == ability && combatant.ability != ability {
            0.75
        } else {
            1.0
        }
    };
    let stages = &combatant.boosts;
    let stats = &combatant.stats;

    StatBlock {
        hp: stats.hp,
        atk: stats.atk * StatStages::multiplier(stages.atk) * ruin("tabletsofruin"),
        def: stats.def * StatStages::multiplier(stages.def) * ruin("swordofruin"),
        spa: stats.spa * StatStages::multiplier(stages.spa) * ruin("vesselofruin"),
        spd: stats.spd * StatStages::multiplier(stages.spd) * ruin("beadsofruin"),
        spe: stats.spe * StatStages::multiplier(stages.spe),
    }
}

/// Type of a move once weather and terrain are taken into account
pub fn resolved_move_type(field: &FieldState, mv: &MoveSlot) -> Type {
    match mv.id.as_str() {
        "weatherball" => match field.weather {
            Some(Weather::Sun | Weather::HarshSun) => Type::Fire,
            Some(Weather::Rain | Weather::HeavyRain) => Type::Water,
            Some(Weather::Snow | Weather::Hail) => Type::Ice,
            Some(Weather::Sand) => Type::Rock,
            _ => mv.move_type,
        },
        "terrainpulse" => match field.terrain {
            Some(Terrain::Electric) => Type::Electric,
            Some(Terrain::Grassy) => Type::Grass,
            Some(Terrain::Misty) => Type::Fairy,
            Some(Terrain::Psychic) => Type::Psychic,
            None => mv.move_type,
        },
        _ => mv.move_type,
    }
}

/// Type multiplier of a move type from `attacker` into `defender`, with
/// absorbing and damage-filtering abilities applied
pub fn type_multiplier(attacker: &CombatantSnapshot, defender: &CombatantSnapshot, move_type: Type) -> f64 {
    let mut multiplier = TypeChart::effectiveness(move_type, &defender.types, &defender.ability);

    let absorbed = match move_type {
        Type::Ground => !is_grounded(defender),
        Type::Water => matches!(defender.ability.as_str(), "dryskin" | "waterabsorb" | "stormdrain"),
        Type::Electric => matches!(defender.ability.as_str(), "voltabsorb" | "lightningrod" | "motordrive"),
        Type::Grass => defender.ability == "sapsipper",
        Type::Fire => matches!(defender.ability.as_str(), "flashfire" | "thermalexchange"),
        _ => false,
    };
    if absorbed {
        return 0.0;
    }
    if move_type == Type::Ghost && defender.ability == "purifyingsalt" {
        multiplier *= 0.5;
    }

    if attacker.ability == "tintedlens" && multiplier > 0.0 && multiplier < 1.0 {
        multiplier = 1.0;
    }
    if matches!(defender.ability.as_str(), "solidrock" | "filter" | "prismarmor") && multiplier > 1.0 {
        multiplier *= 0.75;
    }
    multiplier
}

/// Probability-weighted damage model.
///
/// Every chance-based effect (accuracy, flinching, hit counts, full
/// paralysis, confusion) is folded in as a multiplier on the expected
/// value instead of being rolled.
#[derive(Debug, Clone, Copy)]
pub struct DamageModel<'a> {
    catalog: &'a Catalog,
}

impl<'a> DamageModel<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Expected damage to the defender and net heal to the attacker
    pub fn expected(
        &self,
        field: &FieldState,
        attacker_side: &SideState,
        defender_side: &SideState,
        mv: &MoveSlot,
        ctx: &AttackContext<'_>,
    ) -> DamageHeal {
        let attacker = &attacker_side.active;
        let defender = &defender_side.active;

        if attacker.is_empty() || defender.is_empty() {
            return DamageHeal::ZERO;
        }

        let move_type = resolved_move_type(field, mv);
        let type_mult = type_multiplier(attacker, defender, move_type);

        if attacker.status == Some(Status::Sleep) || mv.is_status() || type_mult == 0.0 {
            return DamageHeal::ZERO;
        }

        if let Some(fixed) = self.fixed_damage(attacker, defender, mv, ctx.reply) {
            return fixed;
        }

        let attacker_stats = boosted_stats(attacker, defender);
        let defender_stats = boosted_stats(defender, attacker);

        let critical = self.catalog.always_crit.contains(mv.id.as_str());
        let power = self.move_power(attacker_side, defender, mv, &attacker_stats, &defender_stats);
        let ratio = stat_ratio(defender, mv, &attacker_stats, &defender_stats, critical);

        let burn = if attacker.status == Some(Status::Burn)
            && mv.category == MoveCategory::Physical
            && mv.id != "facade"
            && attacker.ability != "guts"
        {
            0.5
        } else {
            1.0
        };
        let paralysis = if attacker.status == Some(Status::Paralysis) { 0.75 } else { 1.0 };
        let confusion = if attacker.has_volatile(&Volatile::Confusion) { 0.666 } else { 1.0 };

        let level_factor = (2 * attacker.level / 5 + 2) as f64;
        let mut damage = level_factor * power * ratio / 50.0 + 2.0;

        damage *= weather_multiplier(field, attacker, defender, mv, move_type);
        damage *= terrain_multiplier(field, attacker, defender, mv, move_type);
        damage *= screen_multiplier(attacker, defender_side, mv);
        damage *= stab_multiplier(attacker, move_type);
        damage *= self.item_multiplier(attacker, defender, mv, move_type, type_mult);
        damage *= self.multi_hit_multiplier(attacker, mv);
        damage *= self.accuracy_multiplier(field, attacker, defender, mv);
        damage *= self.other_multiplier(attacker_side, defender, mv, move_type, ctx);
        damage *= flinch_multiplier(attacker, defender, ctx);
        damage *= type_mult;
        damage *= burn;
        if critical {
            damage *= 1.5;
        }
        damage *= paralysis;
        damage *= confusion;

        let damage = damage.max(0.0);
        let heal = self.drain_heal(attacker, mv, damage) - self.self_damage(attacker, defender, mv, damage);
        DamageHeal::new(damage, heal)
    }

    /// Moves whose damage ignores power and stats
    fn fixed_damage(
        &self,
        attacker: &CombatantSnapshot,
        defender: &CombatantSnapshot,
        mv: &MoveSlot,
        reply: Option<&MoveValue>,
    ) -> Option<DamageHeal> {
        let id = mv.id.as_str();
        let damage = match id {
            "dragonrage" => 40.0,
            "sonicboom" => 20.0,
            _ if self.catalog.level_damage.contains(id) => attacker.level as f64,
            _ if self.catalog.half_hp_damage.contains(id) => defender.current_hp / 2.0,
            "painsplit" => {
                let average = (attacker.current_hp + defender.current_hp) / 2.0;
                let damage = (defender.current_hp - average).max(0.0);
                return Some(DamageHeal::new(damage, average - attacker.current_hp));
            }
            "endeavor" => (defender.current_hp - attacker.current_hp).max(0.0),
            "counter" => match reply {
                Some(r) if r.slot.category == MoveCategory::Physical => r.value.damage * 2.0,
                _ => 0.0,
            },
            "mirrorcoat" => match reply {
                Some(r) if r.slot.category == MoveCategory::Special => r.value.damage * 2.0,
                _ => 0.0,
            },
            "metalburst" => reply.map_or(0.0, |r| r.value.damage * 1.5),
            _ => return None,
        };
        Some(DamageHeal::new(damage, 0.0))
    }

    fn move_power(
        &self,
        attacker_side: &SideState,
        defender: &CombatantSnapshot,
        mv: &MoveSlot,
        attacker_stats: &StatBlock,
        defender_stats: &StatBlock,
    ) -> f64 {
        let attacker = &attacker_side.active;
        let hp_fraction = attacker.hp_fraction();

        match mv.id.as_str() {
            "ragingfist" => 50.0 + 50.0 * attacker.hits_taken as f64,
            "lastrespects" => 50.0 + 50.0 * attacker_side.deaths as f64,
            "return" | "frustration" => self.catalog.happiness_power,
            "magnitude" => 71.0,
            "eruption" | "waterspout" => 150.0 * hp_fraction,
            "crushgrip" | "wringout" => 120.0 * hp_fraction,
            "hardpress" => 100.0 * hp_fraction,
            "gyroball" => {
                if attacker_stats.spe > 0.0 {
                    (25.0 * defender_stats.spe / attacker_stats.spe).min(150.0)
                } else {
                    150.0
                }
            }
            "storedpower" | "powertrip" => 20.0 + 20.0 * attacker.boosts.total() as f64,
            "punishment" => 60.0 + 20.0 * attacker.boosts.total() as f64,
            "present" => (54.0 - defender.stats.hp / 4.0).max(0.0),
            "heavyslam" | "heatcrash" => {
                let ratio = if defender.weight > 0.0 {
                    attacker.weight / defender.weight
                } else {
                    f64::INFINITY
                };
                match ratio {
                    r if r > 5.0 => 120.0,
                    r if r > 4.0 => 100.0,
                    r if r > 3.0 => 80.0,
                    r if r > 2.0 => 60.0,
                    _ => 40.0,
                }
            }
            "grassknot" | "lowkick" => match defender.weight {
                w if w < 10.0 => 20.0,
                w if w < 25.0 => 40.0,
                w if w < 50.0 => 60.0,
                w if w < 100.0 => 80.0,
                w if w < 200.0 => 100.0,
                _ => 120.0,
            },
            "electroball" => {
                let ratio = if defender_stats.spe > 0.0 {
                    attacker_stats.spe / defender_stats.spe
                } else {
                    f64::INFINITY
                };
                match ratio {
                    r if r > 4.0 => 150.0,
                    r if r > 3.0 => 120.0,
                    r if r > 2.0 => 80.0,
                    r if r > 1.0 => 60.0,
                    _ => 40.0,
                }
            }
            "flail" | "reversal" => match hp_fraction {
                f if f > 0.688 => 20.0,
                f if f > 0.354 => 40.0,
                f if f > 0.208 => 80.0,
                f if f > 0.104 => 100.0,
                f if f > 0.042 => 150.0,
                _ => 200.0,
            },
            "trumpcard" => match mv.pp {
                4 => 50.0,
                3 => 60.0,
                2 => 80.0,
                1 => 200.0,
                _ => 40.0,
            },
            _ => mv.power,
        }
    }

    fn item_multiplier(
        &self,
        attacker: &CombatantSnapshot,
        defender: &CombatantSnapshot,
        mv: &MoveSlot,
        move_type: Type,
        type_mult: f64,
    ) -> f64 {
        let item = attacker.item.as_str();
        let species = to_id(&attacker.species);
        let physical = mv.category == MoveCategory::Physical;
        let special = mv.category == MoveCategory::Special;
        let dragon_or = |t: Type| move_type == Type::Dragon || move_type == t;

        let mut multiplier = match item {
            "choiceband" if physical => 1.5,
            "choicespecs" if special => 1.5,
            "lifeorb" => 1.3,
            "expertbelt" if type_mult > 1.0 => 1.2,
            "lightball" if species == "pikachu" => 1.5,
            "souldew" if (species == "latios" || species == "latias") && dragon_or(Type::Psychic) => 1.2,
            "adamantorb" if species == "dialga" && dragon_or(Type::Steel) => 1.2,
            "lustrousorb" if species == "palkia" && dragon_or(Type::Water) => 1.2,
            "griseousorb" if species == "giratina" && dragon_or(Type::Ghost) => 1.2,
            "thickclub" if species == "marowak" && physical => 2.0,
            _ if self.catalog.gems.get(item) == Some(&move_type) => 1.3,
            _ if self.catalog.type_boosters.get(item) == Some(&move_type) => 1.2,
            _ => 1.0,
        };

        match defender.item.as_str() {
            "assaultvest" if special => multiplier *= 0.666,
            "eviolite" => multiplier *= 0.666,
            _ => {}
        }
        multiplier
    }

    /// Expected number of hits
    fn multi_hit_multiplier(&self, attacker: &CombatantSnapshot, mv: &MoveSlot) -> f64 {
        let skill_link = attacker.ability == "skilllink";
        let item = attacker.item.as_str();

        match self.catalog.multi_hit(&mv.id) {
            Some(MultiHit::Standard) if skill_link => 5.0,
            Some(MultiHit::Standard) if item == "loadeddice" => 4.5,
            Some(MultiHit::Standard) => 3.1,
            Some(MultiHit::Double) => 2.0,
            Some(MultiHit::Triple) => 3.0,
            Some(MultiHit::TripleKick) if skill_link || item == "loadeddice" => 6.0,
            Some(MultiHit::TripleKick) if item == "widelens" => 5.9,
            Some(MultiHit::TripleKick) => 4.7,
            Some(MultiHit::PopulationBomb) if skill_link => 10.0,
            Some(MultiHit::PopulationBomb) if item == "loadeddice" => 7.0,
            Some(MultiHit::PopulationBomb) if item == "widelens" => 9.5,
            Some(MultiHit::PopulationBomb) => 5.9,
            None => 1.0,
        }
    }

    fn accuracy_multiplier(
        &self,
        field: &FieldState,
        attacker: &CombatantSnapshot,
        defender: &CombatantSnapshot,
        mv: &MoveSlot,
    ) -> f64 {
        // Per-hit accuracy of these is already in the expected hit count
        if matches!(
            self.catalog.multi_hit(&mv.id),
            Some(MultiHit::TripleKick | MultiHit::PopulationBomb)
        ) {
            return 1.0;
        }

        let base = mv.hit_chance();
        let accuracy = if attacker.item == "widelens" {
            base * 1.1
        } else if attacker.ability == "compoundeyes" {
            base * 1.3
        } else if (field.is_snow() && defender.ability == "snowcloak")
            || (field.is_sand() && defender.ability == "sandveil")
        {
            base * 0.8
        } else {
            base
        };
        accuracy.min(1.0)
    }

    fn other_multiplier(
        &self,
        attacker_side: &SideState,
        defender: &CombatantSnapshot,
        mv: &MoveSlot,
        move_type: Type,
        ctx: &AttackContext<'_>,
    ) -> f64 {
        let attacker = &attacker_side.active;
        let physical = mv.category == MoveCategory::Physical;
        let mut multiplier = 1.0;

        match attacker.ability.as_str() {
            "supremeoverlord" => multiplier *= 1.0 + 0.1 * attacker_side.deaths as f64,
            "hugepower" | "purepower" if physical => multiplier *= 2.0,
            "technician" if mv.power <= 60.0 => multiplier *= 1.5,
            "sheerforce" => multiplier *= 1.3,
            "ironfist" if self.catalog.punch.contains(mv.id.as_str()) => multiplier *= 1.2,
            "waterbubble" if move_type == Type::Water => multiplier *= 2.0,
            "transistor" if move_type == Type::Electric => multiplier *= 1.5,
            "guts" if attacker.status.is_some() && physical => multiplier *= 1.5,
            _ => {}
        }

        match defender.ability.as_str() {
            "soundproof" if self.catalog.sound.contains(mv.id.as_str()) => multiplier = 0.0,
            "bulletproof" if self.catalog.bullet.contains(mv.id.as_str()) => multiplier = 0.0,
            "waterbubble" if move_type == Type::Fire => multiplier *= 0.5,
            "furcoat" if physical => multiplier *= 0.5,
            "thickfat" if matches!(move_type, Type::Ice | Type::Fire) => multiplier *= 0.5,
            "fluffy" => {
                if physical {
                    multiplier *= 0.5;
                }
                if move_type == Type::Fire {
                    multiplier *= 2.0;
                }
            }
            "multiscale" | "shadowshield" if defender.is_full_hp() => multiplier *= 0.5,
            _ => {}
        }

        let reply_is_status = ctx.reply.is_none_or(|r| r.slot.is_status());
        match mv.id.as_str() {
            "fishiousrend" | "boltbeak" if ctx.attacker_first || ctx.reply.is_none() => multiplier *= 2.0,
            "synchronoise" if !shares_type(attacker, defender) => multiplier = 0.0,
            "acrobatics" if !attacker.has_item() => multiplier *= 2.0,
            "knockoff" if defender.has_item() => multiplier *= 1.5,
            "facade" if attacker.status.is_some() => multiplier *= 2.0,
            "hex" if defender.status.is_some() => multiplier *= 2.0,
            "suckerpunch" | "thunderclap" if reply_is_status => multiplier = 0.0,
            _ => {}
        }

        multiplier
    }

    fn drain_heal(&self, attacker: &CombatantSnapshot, mv: &MoveSlot, damage: f64) -> f64 {
        let fraction = self.catalog.drain.get(mv.id.as_str()).copied().unwrap_or(0.0);
        let mut heal = damage * fraction;
        if attacker.item == "bigroot" {
            heal *= 1.3;
        }
        heal
    }

    /// Recoil, Life Orb and contact punishment taken by the attacker
    fn self_damage(
        &self,
        attacker: &CombatantSnapshot,
        defender: &CombatantSnapshot,
        mv: &MoveSlot,
        damage: f64,
    ) -> f64 {
        let max_hp = attacker.stats.hp;
        let contact = self.catalog.contact.contains(mv.id.as_str());
        let mut self_damage = 0.0;

        if attacker.ability != "rockhead" {
            let fraction = self.catalog.recoil.get(mv.id.as_str()).copied().unwrap_or(0.0);
            self_damage += damage * fraction;
        }
        if attacker.item == "lifeorb" {
            self_damage += max_hp / 10.0;
        }
        if contact && defender.item == "rockyhelmet" {
            self_damage += max_hp / 6.0;
        }
        if contact && matches!(defender.ability.as_str(), "ironbarbs" | "roughskin") {
            self_damage += max_hp / 8.0;
        }
        self_damage
    }
}

/// Attack/defense ratio for the move's category.
///
/// Critical hits read the defender's unboosted defenses.
fn stat_ratio(
    defender: &CombatantSnapshot,
    mv: &MoveSlot,
    attacker_stats: &StatBlock,
    defender_stats: &StatBlock,
    critical: bool,
) -> f64 {
    let (def, spd) = if critical {
        (defender.stats.def, defender.stats.spd)
    } else {
        (defender_stats.def, defender_stats.spd)
    };

    let (numerator, denominator) = match mv.id.as_str() {
        "psyshock" | "psystrike" | "secretsword" => (attacker_stats.spa, def),
        "bodypress" => (attacker_stats.def, def),
        "foulplay" => (defender_stats.atk, def),
        _ => match mv.category {
            MoveCategory::Physical => (attacker_stats.atk, def),
            MoveCategory::Special => (attacker_stats.spa, spd),
            MoveCategory::Status => return 1.0,
        },
    };

    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn weather_multiplier(
    field: &FieldState,
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    mv: &MoveSlot,
    move_type: Type,
) -> f64 {
    let Some(weather) = field.weather else {
        return 1.0;
    };
    let mut multiplier = 1.0;

    if weather.is_sun() {
        if move_type == Type::Fire || mv.id == "hydrosteam" {
            multiplier *= 1.5;
        } else if move_type == Type::Water {
            multiplier *= 0.5;
        }
        match attacker.ability.as_str() {
            "solarpower" if mv.category == MoveCategory::Special => multiplier *= 1.5,
            "orichalcumpulse" => multiplier *= 1.3,
            _ => {}
        }
    } else if weather.is_rain() {
        match move_type {
            Type::Water => multiplier *= 1.5,
            Type::Fire => multiplier *= 0.5,
            _ => {}
        }
    } else if weather.is_snow() {
        if defender.has_type(Type::Ice) && mv.category == MoveCategory::Physical {
            multiplier *= 0.666;
        }
    } else if weather.is_sand() {
        if defender.has_type(Type::Rock) && mv.category == MoveCategory::Special {
            multiplier *= 0.666;
        }
        if attacker.ability == "sandforce" && matches!(move_type, Type::Rock | Type::Ground | Type::Steel) {
            multiplier *= 1.3;
        }
    } else {
        return multiplier;
    }

    if mv.id == "weatherball" {
        multiplier *= 2.0;
    }
    multiplier
}

fn terrain_multiplier(
    field: &FieldState,
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    mv: &MoveSlot,
    move_type: Type,
) -> f64 {
    let Some(terrain) = field.terrain else {
        return 1.0;
    };
    if !is_grounded(defender) {
        return 1.0;
    }
    let mut multiplier = 1.0;

    match terrain {
        Terrain::Electric => {
            if move_type == Type::Electric {
                multiplier *= 1.5;
            }
            if attacker.ability == "hadronengine" && mv.category == MoveCategory::Special {
                multiplier *= 1.333;
            }
            if mv.id == "risingvoltage" {
                multiplier *= 2.0;
            }
        }
        Terrain::Grassy => {
            if move_type == Type::Grass {
                multiplier *= 1.5;
            }
            if matches!(mv.id.as_str(), "earthquake" | "magnitude" | "bulldoze") {
                multiplier *= 0.5;
            }
            if defender.ability == "grasspelt" && mv.category == MoveCategory::Physical {
                multiplier *= 0.666;
            }
        }
        Terrain::Misty => {
            if move_type == Type::Dragon {
                multiplier *= 0.5;
            }
            if mv.id == "mistyexplosion" {
                multiplier *= 1.5;
            }
        }
        Terrain::Psychic => {
            if move_type == Type::Psychic {
                multiplier *= 1.5;
            }
            if mv.id == "expandingforce" && is_grounded(attacker) {
                multiplier *= 1.5;
            }
            if mv.priority > 0 {
                multiplier = 0.0;
            }
        }
    }

    if mv.id == "terrainpulse" {
        multiplier *= 2.0;
    }
    multiplier
}

fn screen_multiplier(attacker: &CombatantSnapshot, defender_side: &SideState, mv: &MoveSlot) -> f64 {
    if attacker.ability == "infiltrator" {
        return 1.0;
    }
    let physical = mv.category == MoveCategory::Physical;
    let special = mv.category == MoveCategory::Special;

    if (defender_side.has_condition(SideCondition::Reflect) && physical)
        || (defender_side.has_condition(SideCondition::LightScreen) && special)
        || defender_side.has_condition(SideCondition::AuroraVeil)
    {
        0.5
    } else {
        1.0
    }
}

fn stab_multiplier(attacker: &CombatantSnapshot, move_type: Type) -> f64 {
    if !attacker.has_type(move_type) {
        1.0
    } else if attacker.ability == "adaptability" {
        2.0
    } else {
        1.5
    }
}

/// Chance of acting at all when the defender moves first with a flinching move
fn flinch_multiplier(attacker: &CombatantSnapshot, defender: &CombatantSnapshot, ctx: &AttackContext<'_>) -> f64 {
    if ctx.attacker_first {
        return 1.0;
    }
    let mut chance = ctx.flinch_chance;
    if defender.ability == "serenegrace" {
        chance *= 2.0;
    }
    if attacker.ability == "innerfocus" {
        chance = 0.0;
    }
    1.0 - chance.min(1.0)
}
