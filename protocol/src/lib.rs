use thiserror::Error;

pub mod client;
pub mod server;

pub use client::Action;
pub use server::{
    ActionRequest, BattleEvent, BoostsView, CombatantView, EventId, FieldView, LoggedEvent,
    MoveView, Player, Pokemon, PokemonDetails, SideView, Stat, StatsView, parse_event_line,
    parse_log_chunk, to_id,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid request JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
