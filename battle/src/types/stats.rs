//! Stat blocks and stat stages

use rival_protocol::Stat;

/// Stat stages (-6 to +6)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatStages {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl StatStages {
    /// Create new stat stages (all at 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get stage for a stat
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
            Stat::Accuracy => self.accuracy,
            Stat::Evasion => self.evasion,
        }
    }

    /// Set stage for a stat (clamped to -6..+6)
    pub fn set(&mut self, stat: Stat, value: i8) {
        let clamped = value.clamp(-6, 6);
        match stat {
            Stat::Atk => self.atk = clamped,
            Stat::Def => self.def = clamped,
            Stat::Spa => self.spa = clamped,
            Stat::Spd => self.spd = clamped,
            Stat::Spe => self.spe = clamped,
            Stat::Accuracy => self.accuracy = clamped,
            Stat::Evasion => self.evasion = clamped,
        }
    }

    /// Clamp every stage into -6..+6
    pub fn clamped(mut self) -> Self {
        for stat in Self::ALL_STATS {
            self.set(stat, self.get(stat));
        }
        self
    }

    const ALL_STATS: [Stat; 7] = [
        Stat::Atk,
        Stat::Def,
        Stat::Spa,
        Stat::Spd,
        Stat::Spe,
        Stat::Accuracy,
        Stat::Evasion,
    ];

    /// The five battle stats (accuracy and evasion excluded)
    pub const BATTLE_STATS: [Stat; 5] = [Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

    /// Sum of the five battle-stat stages
    pub fn total(&self) -> i32 {
        Self::BATTLE_STATS
            .iter()
            .map(|s| self.get(*s) as i32)
            .sum()
    }

    /// True while every battle stat is still below `cap`
    pub fn all_below(&self, cap: i8) -> bool {
        Self::BATTLE_STATS.iter().all(|s| self.get(*s) < cap)
    }

    /// Multiplier for a stat stage: (2 + s) / 2 when raising, 2 / (2 - s) when lowering
    pub fn multiplier(stage: i8) -> f64 {
        let stage = stage.clamp(-6, 6) as f64;
        if stage >= 0.0 {
            (2.0 + stage) / 2.0
        } else {
            2.0 / (2.0 - stage)
        }
    }
}

/// Stat block
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub hp: f64,
    pub atk: f64,
    pub def: f64,
    pub spa: f64,
    pub spd: f64,
    pub spe: f64,
}

impl StatBlock {
    pub fn new(hp: f64, atk: f64, def: f64, spa: f64, spd: f64, spe: f64) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stages_are_zero() {
        let stages = StatStages::new();
        assert_eq!(stages.total(), 0);
        assert_eq!(stages.get(Stat::Accuracy), 0);
    }

    #[test]
    fn test_set_clamps_to_bounds() {
        let mut stages = StatStages::new();
        stages.set(Stat::Atk, 10);
        assert_eq!(stages.atk, 6);
        stages.set(Stat::Def, -10);
        assert_eq!(stages.def, -6);
    }

    #[test]
    fn test_clamped() {
        let stages = StatStages {
            spe: 9,
            spa: -8,
            ..Default::default()
        }
        .clamped();
        assert_eq!(stages.spe, 6);
        assert_eq!(stages.spa, -6);
    }

    #[test]
    fn test_total_and_all_below() {
        let stages = StatStages {
            atk: 2,
            spe: 1,
            def: -1,
            accuracy: 3,
            ..Default::default()
        };
        assert_eq!(stages.total(), 2);
        assert!(stages.all_below(6));
        assert!(!stages.all_below(2));
    }

    #[test]
    fn test_stat_multiplier() {
        assert_eq!(StatStages::multiplier(0), 1.0);
        assert_eq!(StatStages::multiplier(1), 1.5);
        assert_eq!(StatStages::multiplier(2), 2.0);
        assert_eq!(StatStages::multiplier(6), 4.0);
        assert_eq!(StatStages::multiplier(-1), 2.0 / 3.0);
        assert_eq!(StatStages::multiplier(-2), 0.5);
        assert_eq!(StatStages::multiplier(-6), 0.25);
    }

    #[test]
    fn test_multiplier_is_positive_and_monotonic() {
        let mut previous = 0.0;
        for stage in -6..=6 {
            let m = StatStages::multiplier(stage);
            assert!(m > previous);
            previous = m;
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_stages_serialize_by_field() {
        let stages = StatStages {
            atk: 2,
            spe: -1,
            ..Default::default()
        };
        let json = serde_json::to_value(stages).unwrap();
        assert_eq!(json["atk"], 2);
        assert_eq!(json["spe"], -1);
        assert_eq!(serde_json::from_value::<StatStages>(json).unwrap(), stages);
    }
}
