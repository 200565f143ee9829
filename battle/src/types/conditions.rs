//! Field and side conditions

/// Weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
    Snow,        // Gen 9 replacement for Hail
    HarshSun,    // Desolate Land (Primal Groudon)
    HeavyRain,   // Primordial Sea (Primal Kyogre)
    StrongWinds, // Delta Stream (Mega Rayquaza)
}

impl Weather {
    /// Parse from protocol string
    pub fn from_protocol(s: &str) -> Option<Self> {
        // Normalize: lowercase and remove spaces
        let normalized = s.to_lowercase().replace([' ', '-', '_'], "");

        match normalized.as_str() {
            "sunnyday" | "sun" | "sunny" | "harshsunlight" => Some(Weather::Sun),
            "raindance" | "rain" | "raining" => Some(Weather::Rain),
            "sandstorm" | "sand" => Some(Weather::Sand),
            "hail" => Some(Weather::Hail),
            "snow" | "snowscape" => Some(Weather::Snow),
            "desolateland" | "harshsun" | "extremelyharshsunlight" => Some(Weather::HarshSun),
            "primordialsea" | "heavyrain" => Some(Weather::HeavyRain),
            "deltastream" | "strongwinds" | "mysteriousaircurrent" => Some(Weather::StrongWinds),
            _ => None,
        }
    }

    pub fn is_sun(&self) -> bool {
        matches!(self, Weather::Sun | Weather::HarshSun)
    }

    pub fn is_rain(&self) -> bool {
        matches!(self, Weather::Rain | Weather::HeavyRain)
    }

    pub fn is_sand(&self) -> bool {
        matches!(self, Weather::Sand)
    }

    pub fn is_snow(&self) -> bool {
        matches!(self, Weather::Snow)
    }
}

/// Terrain conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Electric,
    Grassy,
    Misty,
    Psychic,
}

impl Terrain {
    /// Parse from protocol string
    pub fn from_protocol(s: &str) -> Option<Self> {
        // Strip common prefixes
        let clean = s
            .strip_prefix("move: ")
            .unwrap_or(s);

        // Normalize
        let normalized = clean.to_lowercase().replace([' ', '-', '_'], "");

        match normalized.as_str() {
            "electricterrain" | "electric" => Some(Terrain::Electric),
            "grassyterrain" | "grassy" => Some(Terrain::Grassy),
            "mistyterrain" | "misty" => Some(Terrain::Misty),
            "psychicterrain" | "psychic" => Some(Terrain::Psychic),
            _ => None,
        }
    }
}

/// Side conditions (hazards and screens)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideCondition {
    // Screens
    Reflect,
    LightScreen,
    AuroraVeil,

    // Entry hazards
    Spikes,      // Stackable 1-3
    ToxicSpikes, // Stackable 1-2
    StealthRock,
    StickyWeb,
}

impl SideCondition {
    /// Parse from protocol string
    pub fn from_protocol(s: &str) -> Option<Self> {
        // Strip common prefixes
        let clean = s
            .strip_prefix("move: ")
            .unwrap_or(s);

        // Normalize
        let normalized = clean.to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "reflect" => Some(SideCondition::Reflect),
            "lightscreen" => Some(SideCondition::LightScreen),
            "auroraveil" => Some(SideCondition::AuroraVeil),
            "spikes" => Some(SideCondition::Spikes),
            "toxicspikes" => Some(SideCondition::ToxicSpikes),
            "stealthrock" => Some(SideCondition::StealthRock),
            "stickyweb" => Some(SideCondition::StickyWeb),
            _ => None,
        }
    }

    /// Get maximum layers for this condition
    pub fn max_layers(&self) -> u8 {
        match self {
            SideCondition::Spikes => 3,
            SideCondition::ToxicSpikes => 2,
            _ => 1,
        }
    }

    /// Check if this is a screen
    pub fn is_screen(&self) -> bool {
        matches!(
            self,
            SideCondition::Reflect | SideCondition::LightScreen | SideCondition::AuroraVeil
        )
    }

    /// Check if this is an entry hazard
    pub fn is_hazard(&self) -> bool {
        matches!(
            self,
            SideCondition::Spikes
                | SideCondition::ToxicSpikes
                | SideCondition::StealthRock
                | SideCondition::StickyWeb
        )
    }
}

/// State for a side condition (tracks layers for stackable conditions)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideConditionState {
    pub layers: u8,
}

impl SideConditionState {
    /// Create a new condition state with 1 layer
    pub fn new() -> Self {
        Self { layers: 1 }
    }

    /// Add a layer, returns true if successful
    pub fn add_layer(&mut self, condition: SideCondition) -> bool {
        if self.layers < condition.max_layers() {
            self.layers += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_from_protocol() {
        assert_eq!(Weather::from_protocol("SunnyDay"), Some(Weather::Sun));
        assert_eq!(Weather::from_protocol("sunny"), Some(Weather::Sun));
        assert_eq!(Weather::from_protocol("raining"), Some(Weather::Rain));
        assert_eq!(Weather::from_protocol("Sandstorm"), Some(Weather::Sand));
        assert_eq!(Weather::from_protocol("Snow"), Some(Weather::Snow));
        assert_eq!(
            Weather::from_protocol("DesolateLand"),
            Some(Weather::HarshSun)
        );
        assert_eq!(Weather::from_protocol("none"), None);
    }

    #[test]
    fn test_weather_families() {
        assert!(Weather::HarshSun.is_sun());
        assert!(Weather::HeavyRain.is_rain());
        assert!(!Weather::Hail.is_snow());
        assert!(Weather::Sand.is_sand());
    }

    #[test]
    fn test_terrain_from_protocol() {
        assert_eq!(
            Terrain::from_protocol("Electric Terrain"),
            Some(Terrain::Electric)
        );
        assert_eq!(
            Terrain::from_protocol("move: Grassy Terrain"),
            Some(Terrain::Grassy)
        );
        assert_eq!(Terrain::from_protocol("psychicterrain"), Some(Terrain::Psychic));
        assert_eq!(Terrain::from_protocol("none"), None);
    }

    #[test]
    fn test_side_condition_from_protocol() {
        assert_eq!(
            SideCondition::from_protocol("Stealth Rock"),
            Some(SideCondition::StealthRock)
        );
        assert_eq!(
            SideCondition::from_protocol("move: Reflect"),
            Some(SideCondition::Reflect)
        );
        assert_eq!(SideCondition::from_protocol("protect"), None);
    }

    #[test]
    fn test_side_condition_kinds() {
        assert_eq!(SideCondition::Spikes.max_layers(), 3);
        assert_eq!(SideCondition::ToxicSpikes.max_layers(), 2);
        assert_eq!(SideCondition::StealthRock.max_layers(), 1);
        assert!(SideCondition::AuroraVeil.is_screen());
        assert!(SideCondition::StickyWeb.is_hazard());
        assert!(!SideCondition::Reflect.is_hazard());
    }

    #[test]
    fn test_side_condition_state() {
        let mut state = SideConditionState::new();
        assert!(state.add_layer(SideCondition::Spikes));
        assert!(state.add_layer(SideCondition::Spikes));
        assert!(!state.add_layer(SideCondition::Spikes));
        assert_eq!(state.layers, 3);
    }
}
