mod battle;
mod battle_builder;
mod battle_options;
mod damage;

pub use battle::{
    Battle,
    BattleState,
    Side,
    StatChange,
    TurnResult,
};
pub use battle_builder::BattleBuilder;
pub use battle_options::{
    BattleEngineOptions,
    RandomizeDamage,
};
pub use damage::{
    BASE_DAMAGE_RATIO,
    BASELINE_POWER,
    DamageCalculation,
    MAX_RANDOM_FACTOR,
    MIN_RANDOM_FACTOR,
    MoveDamage,
    calculate_damage,
};
