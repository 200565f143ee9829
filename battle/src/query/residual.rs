//! End-of-turn damage and healing

use super::damage::DamageHeal;
use crate::types::{CombatantSnapshot, FieldState, Status, Type, Volatile};

/// Residual damage and healing a combatant takes at the end of each turn.
///
/// Every fraction is of the affected combatant's own max HP.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResidualEffectsModel;

impl ResidualEffectsModel {
    /// Expected end-of-turn damage and heal for `combatant` while facing `opponent`
    pub fn end_of_turn(
        field: &FieldState,
        combatant: &CombatantSnapshot,
        opponent: &CombatantSnapshot,
    ) -> DamageHeal {
        if combatant.is_empty() {
            return DamageHeal::ZERO;
        }

        let max_hp = combatant.stats.hp;
        let mut damage = 0.0;
        let mut heal = 0.0;

        match combatant.status {
            Some(Status::Burn) => damage += max_hp / 16.0,
            Some(status) if status.is_poison() && combatant.ability == "poisonheal" => {
                heal += max_hp / 8.0;
            }
            Some(Status::Poison) => damage += max_hp / 8.0,
            Some(Status::BadPoison) => damage += max_hp / 16.0,
            _ => {}
        }

        match combatant.ability.as_str() {
            "dryskin" if field.is_rain() => heal += max_hp / 8.0,
            "dryskin" | "solarpower" if field.is_sun() => damage += max_hp / 8.0,
            _ => {}
        }

        if field.is_sand()
            && !combatant.has_type(Type::Rock)
            && !combatant.has_type(Type::Ground)
            && !combatant.has_type(Type::Steel)
        {
            damage += max_hp / 16.0;
        }

        match combatant.item.as_str() {
            "leftovers" => heal += max_hp / 16.0,
            "blacksludge" if combatant.has_type(Type::Poison) => heal += max_hp / 16.0,
            "blacksludge" => damage += max_hp / 16.0,
            _ => {}
        }

        if combatant.has_volatile(&Volatile::LeechSeed) {
            damage += max_hp / 8.0;
        }
        // Seeds planted on the opponent feed this side
        if opponent.has_volatile(&Volatile::LeechSeed) {
            heal += max_hp / 8.0;
        }
        if combatant.has_volatile(&Volatile::Curse) {
            damage += max_hp / 4.0;
        }
        if combatant.has_volatile(&Volatile::AquaRing) {
            heal += max_hp / 16.0;
        }
        if combatant.has_volatile(&Volatile::Ingrain) {
            heal += max_hp / 16.0;
        }
        if combatant.has_volatile(&Volatile::PartialTrap) {
            damage += if opponent.item == "bindingband" {
                max_hp / 6.0
            } else {
                max_hp / 8.0
            };
        }

        DamageHeal::new(damage, heal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StatBlock, Weather};

    fn combatant(types: &[Type]) -> CombatantSnapshot {
        CombatantSnapshot::new("x", "x", StatBlock::new(160.0, 100.0, 100.0, 100.0, 100.0, 100.0))
            .with_types(types)
    }

    fn residual(field: &FieldState, c: &CombatantSnapshot, o: &CombatantSnapshot) -> DamageHeal {
        ResidualEffectsModel::end_of_turn(field, c, o)
    }

    #[test]
    fn test_nothing_on_a_clean_field() {
        let c = combatant(&[Type::Normal]);
        let o = combatant(&[Type::Normal]);
        assert_eq!(residual(&FieldState::new(), &c, &o), DamageHeal::ZERO);
    }

    #[test]
    fn test_status_damage() {
        let o = combatant(&[Type::Normal]);
        let field = FieldState::new();

        let burned = combatant(&[Type::Normal]).with_status(Status::Burn);
        assert_eq!(residual(&field, &burned, &o).damage, 10.0);

        let poisoned = combatant(&[Type::Normal]).with_status(Status::Poison);
        assert_eq!(residual(&field, &poisoned, &o).damage, 20.0);

        let toxic = combatant(&[Type::Normal]).with_status(Status::BadPoison);
        assert_eq!(residual(&field, &toxic, &o).damage, 10.0);

        let healer = toxic.with_ability("poisonheal");
        assert_eq!(residual(&field, &healer, &o), DamageHeal::new(0.0, 20.0));
    }

    #[test]
    fn test_weather() {
        let o = combatant(&[Type::Normal]);
        let sand = FieldState::new().with_weather(Weather::Sand);
        assert_eq!(residual(&sand, &combatant(&[Type::Normal]), &o).damage, 10.0);
        assert_eq!(residual(&sand, &combatant(&[Type::Steel]), &o).damage, 0.0);

        let dry = combatant(&[Type::Water]).with_ability("dryskin");
        let rain = FieldState::new().with_weather(Weather::Rain);
        assert_eq!(residual(&rain, &dry, &o).heal, 20.0);
        let sun = FieldState::new().with_weather(Weather::Sun);
        assert_eq!(residual(&sun, &dry, &o).damage, 20.0);
    }

    #[test]
    fn test_black_sludge() {
        let o = combatant(&[Type::Normal]);
        let field = FieldState::new();
        let poison = combatant(&[Type::Poison]).with_item("blacksludge");
        assert_eq!(residual(&field, &poison, &o), DamageHeal::new(0.0, 10.0));
        let normal = combatant(&[Type::Normal]).with_item("blacksludge");
        assert_eq!(residual(&field, &normal, &o), DamageHeal::new(10.0, 0.0));
    }

    #[test]
    fn test_leech_seed_both_ways() {
        let field = FieldState::new();
        let seeded = combatant(&[Type::Normal]).with_volatile(Volatile::LeechSeed);
        let seeder = combatant(&[Type::Grass]);
        assert_eq!(residual(&field, &seeded, &seeder).damage, 20.0);
        assert_eq!(residual(&field, &seeder, &seeded).heal, 20.0);
    }

    #[test]
    fn test_binding_band() {
        let field = FieldState::new();
        let bound = combatant(&[Type::Normal]).with_volatile(Volatile::PartialTrap);
        let plain = combatant(&[Type::Normal]);
        assert_eq!(residual(&field, &bound, &plain).damage, 20.0);
        let band = plain.with_item("bindingband");
        assert!((residual(&field, &bound, &band).damage - 160.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_slot() {
        let field = FieldState::new().with_weather(Weather::Sand);
        let o = combatant(&[Type::Normal]);
        assert_eq!(residual(&field, &CombatantSnapshot::empty(), &o), DamageHeal::ZERO);
    }
}
