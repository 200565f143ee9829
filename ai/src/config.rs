//! Tunable constants of the decision engine

use serde::Deserialize;

use crate::error::DecisionError;

/// Decision engine configuration.
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Maximum simulated turns per engagement
    pub horizon: u32,
    /// Chance of attacking with the simulator's best move instead of a random damaging one
    pub best_move_chance: f64,
    pub status_move_chance: f64,
    pub volatile_move_chance: f64,
    /// Chance of encoring a target that knows a status move
    pub encore_chance: f64,
    /// Chance of encoring a slower target that just used a status move
    pub encore_after_status_chance: f64,
    pub substitute_when_winning_chance: f64,
    /// Substitute chance per opponent move that cannot break it
    pub substitute_per_weak_move_chance: f64,
    pub pivot_switch_chance: f64,
    /// Chance of boosting anyway when the opponent can reset boosts
    pub boost_against_phazer_chance: f64,
    pub destiny_bond_chance: f64,
    /// Survivable turns from which boosting is always considered
    pub turns_alive_to_boost: u32,
    /// Opponent stage total that triggers anti-boost moves
    pub anti_boost_threshold: i32,
    /// Message sent to participants when a decision faults
    pub fault_notice: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            horizon: 10,
            best_move_chance: 0.8,
            status_move_chance: 0.8,
            volatile_move_chance: 0.8,
            encore_chance: 0.5,
            encore_after_status_chance: 0.9,
            substitute_when_winning_chance: 0.5,
            substitute_per_weak_move_chance: 0.25,
            pivot_switch_chance: 0.5,
            boost_against_phazer_chance: 0.5,
            destiny_bond_chance: 0.8,
            turns_alive_to_boost: 4,
            anti_boost_threshold: 2,
            fault_notice: "An error occurred in the battle AI, please report this to the developers."
                .to_string(),
        }
    }
}

impl AiConfig {
    /// Parse a configuration from JSON and check its probabilities
    pub fn from_json(json: &str) -> Result<Self, DecisionError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Every `*_chance` field must be a probability
    pub fn validate(&self) -> Result<(), DecisionError> {
        let chances = [
            ("best_move_chance", self.best_move_chance),
            ("status_move_chance", self.status_move_chance),
            ("volatile_move_chance", self.volatile_move_chance),
            ("encore_chance", self.encore_chance),
            ("encore_after_status_chance", self.encore_after_status_chance),
            ("substitute_when_winning_chance", self.substitute_when_winning_chance),
            ("substitute_per_weak_move_chance", self.substitute_per_weak_move_chance),
            ("pivot_switch_chance", self.pivot_switch_chance),
            ("boost_against_phazer_chance", self.boost_against_phazer_chance),
            ("destiny_bond_chance", self.destiny_bond_chance),
        ];
        match chances.into_iter().find(|(_, value)| !(0.0..=1.0).contains(value)) {
            Some((field, value)) => Err(DecisionError::InvalidProbability { field, value }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AiConfig::from_json(r#"{"horizon": 6, "best_move_chance": 1.0}"#).unwrap();
        assert_eq!(config.horizon, 6);
        assert_eq!(config.best_move_chance, 1.0);
        assert_eq!(config.turns_alive_to_boost, 4);
        assert_eq!(config.anti_boost_threshold, 2);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AiConfig::from_json("{}").unwrap(), AiConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            AiConfig::from_json(r#"{"horizon": "long"}"#),
            Err(DecisionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_probabilities_must_be_in_range() {
        assert!(matches!(
            AiConfig::from_json(r#"{"best_move_chance": 1.5}"#),
            Err(DecisionError::InvalidProbability { field: "best_move_chance", .. })
        ));
        assert!(matches!(
            AiConfig::from_json(r#"{"pivot_switch_chance": -0.1}"#),
            Err(DecisionError::InvalidProbability { field: "pivot_switch_chance", .. })
        ));
        assert!(AiConfig::from_json(r#"{"destiny_bond_chance": 0.0, "encore_chance": 1.0}"#).is_ok());
        assert!(AiConfig::default().validate().is_ok());
    }
}
