use anyhow::Result;
use monbattle::{
    Battle,
    BattleBuilder,
    BattleEngineOptions,
    ElementalType,
    MoveCatalog,
    RandomizeDamage,
};

use crate::{
    ControlledRandomNumberGenerator,
    TestCombatantBuilder,
};

enum TestCombatant {
    Generated(String, ElementalType),
    Fixed(TestCombatantBuilder),
}

/// Battle builder object for integration tests.
pub struct TestBattleBuilder {
    engine_options: BattleEngineOptions,
    combatants: Vec<TestCombatant>,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            engine_options: BattleEngineOptions::default(),
            combatants: Vec::new(),
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] from the battle builder.
    pub fn build(mut self) -> Result<Battle> {
        if self.controlled_rng {
            self.engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }

        let mut builder = BattleBuilder::new(self.engine_options);
        for combatant in self.combatants {
            match combatant {
                TestCombatant::Generated(name, typ) => {
                    builder.create_combatant(name, typ)?;
                }
                TestCombatant::Fixed(combatant) => builder.add_combatant(combatant.build()?)?,
            }
        }
        Ok(builder.build()?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.engine_options.seed = Some(seed);
        self
    }

    /// Replaces the battle's RNG with a [`ControlledRandomNumberGenerator`].
    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_randomize_damage(mut self, randomize_damage: RandomizeDamage) -> Self {
        self.engine_options.randomize_damage = randomize_damage;
        self
    }

    pub fn with_log_damage_calculation(mut self, log_damage_calculation: bool) -> Self {
        self.engine_options.log_damage_calculation = log_damage_calculation;
        self
    }

    pub fn with_move_catalog(mut self, move_catalog: MoveCatalog) -> Self {
        self.engine_options.move_catalog = move_catalog;
        self
    }

    /// Adds a combatant generated from the battle's RNG and move catalog.
    pub fn with_generated_combatant<S>(mut self, name: S, typ: ElementalType) -> Self
    where
        S: Into<String>,
    {
        self.combatants
            .push(TestCombatant::Generated(name.into(), typ));
        self
    }

    /// Adds a combatant with fixed stats and moves.
    pub fn with_combatant(mut self, combatant: TestCombatantBuilder) -> Self {
        self.combatants.push(TestCombatant::Fixed(combatant));
        self
    }
}
