use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    moves::MoveCatalog,
    rng::{
        PseudoRandomNumberGenerator,
        RealPseudoRandomNumberGenerator,
    },
};

/// Battle engine option for how the random factor in the damage calculation is chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RandomizeDamage {
    /// Draw the random factor uniformly from `[0.85, 1.00]`.
    ///
    /// This is the default behavior.
    #[default]
    Randomize,
    /// Always use the maximum factor, 1.00.
    Max,
    /// Always use the minimum factor, 0.85.
    Min,
}

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

/// Options that change how the battle engine behaves.
///
/// None of these options change the rules of a battle. They exist to make battles reproducible and
/// observable, mostly for tests and debugging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEngineOptions {
    /// Seed for the battle's random number generator.
    ///
    /// If unset, a random seed is generated.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,

    /// Describes how the random factor of the damage calculation is chosen.
    ///
    /// Pinning the factor is useful for tests against the damage calculator to discover the
    /// minimum and maximum damage values.
    #[serde(default)]
    pub randomize_damage: RandomizeDamage,

    /// Should every factor of each damage calculation be written to the battle log?
    ///
    /// The calculation is always reported through the `log` facade at debug level.
    #[serde(default)]
    pub log_damage_calculation: bool,

    /// The catalog combatants draw their moves from.
    #[serde(default)]
    pub move_catalog: MoveCatalog,
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            seed: None,
            rng_factory: default_rng_factory(),
            randomize_damage: RandomizeDamage::default(),
            log_damage_calculation: false,
            move_catalog: MoveCatalog::default(),
        }
    }
}
