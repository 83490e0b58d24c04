extern crate alloc;

pub mod battle;
pub mod common;
pub mod error;
pub mod log;
pub mod mons;
pub mod moves;
pub mod rng;

pub use battle::{
    Battle,
    BattleBuilder,
    BattleEngineOptions,
    BattleState,
    DamageCalculation,
    MoveDamage,
    RandomizeDamage,
    Side,
    StatChange,
    TurnResult,
    calculate_damage,
};
pub use error::BattleError;
pub use mons::{
    Combatant,
    ElementalType,
    Stat,
    StatTable,
    StatTarget,
    TypeEffectiveness,
    generate_stats,
    type_effectiveness,
};
pub use moves::{
    Move,
    MoveCatalog,
    MoveCategory,
    MoveKind,
    MoveUses,
    StatEffect,
};
