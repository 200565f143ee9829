//! Pure battle queries used by the decision engine
//!
//! Everything here reads snapshots and returns numbers; nothing mutates
//! battle state.

mod damage;
mod matchup;
mod residual;
mod speed;

pub use damage::{
    boosted_stats, resolved_move_type, type_multiplier, AttackContext, DamageHeal, DamageModel,
    MoveValue,
};
pub use matchup::{
    can_switch, can_use_status_move, entry_hazard_damage, is_grounded, is_powder_protected,
    shares_type,
};
pub use residual::ResidualEffectsModel;
pub use speed::TurnOrderResolver;
