mod combatant;
mod stats;
mod r#type;

pub use combatant::Combatant;
pub use stats::{
    ATK_RANGE,
    DEF_RANGE,
    HP_RANGE,
    SPE_RANGE,
    Stat,
    StatTable,
    StatTarget,
    generate_stats,
};
pub use r#type::{
    ElementalType,
    TypeEffectiveness,
    type_effectiveness,
};
