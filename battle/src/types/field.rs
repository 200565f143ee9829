//! Global field state

use super::conditions::{Terrain, Weather};

/// Global field state affecting both actives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current weather condition
    pub weather: Option<Weather>,

    /// Current terrain
    pub terrain: Option<Terrain>,

    /// Trick Room active (slower side moves first)
    pub trick_room: bool,
}

impl FieldState {
    /// Create a new empty field state
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from protocol strings; unknown names read as no condition
    pub fn from_protocol(weather: Option<&str>, terrain: Option<&str>, trick_room: bool) -> Self {
        Self {
            weather: weather.and_then(Weather::from_protocol),
            terrain: terrain.and_then(Terrain::from_protocol),
            trick_room,
        }
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = Some(terrain);
        self
    }

    pub fn is_sun(&self) -> bool {
        self.weather.is_some_and(|w| w.is_sun())
    }

    pub fn is_rain(&self) -> bool {
        self.weather.is_some_and(|w| w.is_rain())
    }

    pub fn is_sand(&self) -> bool {
        self.weather.is_some_and(|w| w.is_sand())
    }

    pub fn is_snow(&self) -> bool {
        self.weather.is_some_and(|w| w.is_snow())
    }
}
