//! Status conditions (volatile and non-volatile)

/// Non-volatile status conditions (persist through switching)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadPoison, // Toxic
    Sleep,
}

impl Status {
    /// Parse from protocol string ("brn", "frz", "par", "psn", "tox", "slp")
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "brn" | "burn" => Some(Status::Burn),
            "frz" | "freeze" => Some(Status::Freeze),
            "par" | "paralysis" => Some(Status::Paralysis),
            "psn" | "poison" => Some(Status::Poison),
            "tox" | "badpoison" | "toxic" => Some(Status::BadPoison),
            "slp" | "sleep" => Some(Status::Sleep),
            _ => None,
        }
    }

    pub fn is_poison(&self) -> bool {
        matches!(self, Status::Poison | Status::BadPoison)
    }
}

/// Volatile status conditions (cleared on switching)
///
/// Only the conditions the decision engine reasons about get a variant;
/// everything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Volatile {
    // Movement restriction
    Trapped,     // Mean Look, Spider Web, Block
    PartialTrap, // Bind, Wrap, Fire Spin, etc.

    // Mental effects
    Confusion,
    Taunt,
    Encore,

    // Damage over time / healing
    LeechSeed,
    Curse, // Ghost-type curse
    Ingrain,
    AquaRing,

    // Protection
    Substitute,
    MagicCoat,

    Other(String),
}

impl Volatile {
    /// Parse from protocol string
    pub fn from_protocol(s: &str) -> Self {
        let clean = s
            .strip_prefix("move: ")
            .unwrap_or(s);

        let normalized = clean.to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "trapped" | "meanlook" | "spiderweb" | "block" => Volatile::Trapped,
            "partiallytrapped" | "bind" | "wrap" | "firespin" | "clamp" | "whirlpool"
            | "sandtomb" | "magmastorm" | "infestation" | "snaptrap" | "thundercage" => {
                Volatile::PartialTrap
            }
            "confusion" | "confused" => Volatile::Confusion,
            "taunt" => Volatile::Taunt,
            "encore" => Volatile::Encore,
            "leechseed" | "leech" => Volatile::LeechSeed,
            "curse" | "cursed" => Volatile::Curse,
            "ingrain" => Volatile::Ingrain,
            "aquaring" => Volatile::AquaRing,
            "substitute" => Volatile::Substitute,
            "magiccoat" => Volatile::MagicCoat,
            _ => Volatile::Other(normalized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_protocol() {
        assert_eq!(Status::from_protocol("brn"), Some(Status::Burn));
        assert_eq!(Status::from_protocol("tox"), Some(Status::BadPoison));
        assert_eq!(Status::from_protocol("slp"), Some(Status::Sleep));
        assert_eq!(Status::from_protocol("Paralysis"), Some(Status::Paralysis));
        assert_eq!(Status::from_protocol("fnt"), None);
    }

    #[test]
    fn test_status_is_poison() {
        assert!(Status::Poison.is_poison());
        assert!(Status::BadPoison.is_poison());
        assert!(!Status::Burn.is_poison());
    }

    #[test]
    fn test_volatile_aliases() {
        assert_eq!(Volatile::from_protocol("leech"), Volatile::LeechSeed);
        assert_eq!(Volatile::from_protocol("move: Leech Seed"), Volatile::LeechSeed);
        assert_eq!(Volatile::from_protocol("cursed"), Volatile::Curse);
        assert_eq!(Volatile::from_protocol("Fire Spin"), Volatile::PartialTrap);
        assert_eq!(Volatile::from_protocol("clamp"), Volatile::PartialTrap);
        assert_eq!(
            Volatile::from_protocol("Salt Cure"),
            Volatile::Other("saltcure".to_string())
        );
    }
}
