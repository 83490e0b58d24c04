use crate::{
    battle::{
        Battle,
        BattleEngineOptions,
    },
    error::BattleError,
    mons::{
        Combatant,
        ElementalType,
    },
    rng::PseudoRandomNumberGenerator,
};

/// Object for building a battle prior to starting it.
///
/// The builder owns the random number generator from the start, so combatant generation and every
/// turn of the resulting battle draw from the same seeded sequence.
pub struct BattleBuilder {
    options: BattleEngineOptions,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    combatants: Vec<Combatant>,
}

impl BattleBuilder {
    /// Constructs a new battle builder object.
    pub fn new(options: BattleEngineOptions) -> Self {
        let prng = (options.rng_factory)(options.seed);
        Self {
            options,
            prng,
            combatants: Vec::new(),
        }
    }

    /// Generates a new combatant with random stats and moves from the configured catalog.
    ///
    /// The first combatant created is placed on side A, and the second on side B.
    pub fn create_combatant<S>(
        &mut self,
        name: S,
        typ: ElementalType,
    ) -> Result<&Combatant, BattleError>
    where
        S: Into<String>,
    {
        if self.combatants.len() >= 2 {
            return Err(BattleError::CombatantCount(self.combatants.len() + 1));
        }
        let combatant = Combatant::generate(
            name,
            typ,
            &self.options.move_catalog,
            self.prng.as_mut(),
        )?;
        self.combatants.push(combatant);
        Ok(&self.combatants[self.combatants.len() - 1])
    }

    /// Adds an already-built combatant.
    pub fn add_combatant(&mut self, combatant: Combatant) -> Result<(), BattleError> {
        if self.combatants.len() >= 2 {
            return Err(BattleError::CombatantCount(self.combatants.len() + 1));
        }
        self.combatants.push(combatant);
        Ok(())
    }

    pub fn options(&self) -> &BattleEngineOptions {
        &self.options
    }

    /// Combatants created so far.
    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    /// Builds the battle.
    pub fn build(self) -> Result<Battle, BattleError> {
        let count = self.combatants.len();
        let [a, b]: [Combatant; 2] = self
            .combatants
            .try_into()
            .map_err(|_| BattleError::CombatantCount(count))?;
        Ok(Battle::with_prng(a, b, self.prng, self.options))
    }
}

#[cfg(test)]
mod battle_builder_test {
    use assert_matches::assert_matches;

    use crate::{
        battle::{
            BattleBuilder,
            BattleEngineOptions,
            Side,
        },
        error::BattleError,
        mons::ElementalType,
        moves::MoveCatalog,
    };

    fn options(seed: u64) -> BattleEngineOptions {
        BattleEngineOptions {
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn requires_two_combatants() {
        let builder = BattleBuilder::new(options(1));
        assert_matches!(builder.build().err(), Some(BattleError::CombatantCount(0)));

        let mut builder = BattleBuilder::new(options(1));
        builder
            .create_combatant("Squirt", ElementalType::Water)
            .unwrap();
        assert_matches!(builder.build().err(), Some(BattleError::CombatantCount(1)));

        builder = BattleBuilder::new(options(1));
        builder
            .create_combatant("Squirt", ElementalType::Water)
            .unwrap();
        builder
            .create_combatant("Cinder", ElementalType::Fire)
            .unwrap();
        assert_matches!(
            builder.create_combatant("Sprout", ElementalType::Grass),
            Err(BattleError::CombatantCount(3))
        );
        assert!(builder.build().is_ok());
    }

    #[test]
    fn rejects_invalid_combatants() {
        let mut builder = BattleBuilder::new(options(1));
        assert_matches!(
            builder.create_combatant("", ElementalType::Water),
            Err(BattleError::InvalidName)
        );
        assert_matches!(
            builder.create_combatant("Blob", ElementalType::Normal),
            Err(BattleError::InvalidTypeSelection(_))
        );
        assert!(builder.combatants().is_empty());
    }

    #[test]
    fn places_combatants_in_creation_order() {
        let mut builder = BattleBuilder::new(options(2));
        builder
            .create_combatant("Squirt", ElementalType::Water)
            .unwrap();
        builder
            .create_combatant("Sprout", ElementalType::Grass)
            .unwrap();
        let battle = builder.build().unwrap();
        assert_eq!(battle.combatant(Side::A).name(), "Squirt");
        assert_eq!(battle.combatant(Side::B).name(), "Sprout");
        assert_eq!(battle.combatant(Side::B).typ(), ElementalType::Grass);
    }

    #[test]
    fn same_seed_builds_same_battle() {
        let build = || {
            let mut builder = BattleBuilder::new(options(5));
            builder
                .create_combatant("Squirt", ElementalType::Water)
                .unwrap();
            builder
                .create_combatant("Cinder", ElementalType::Fire)
                .unwrap();
            builder.build().unwrap()
        };
        let mut first = build();
        let mut second = build();
        assert_eq!(
            first.combatants().collect::<Vec<_>>(),
            second.combatants().collect::<Vec<_>>()
        );
        while !first.ended() {
            assert_eq!(first.execute_turn(0), second.execute_turn(0));
        }
        assert_eq!(first.winner(), second.winner());
    }

    #[test]
    fn uses_configured_catalog() {
        let mut builder = BattleBuilder::new(BattleEngineOptions {
            move_catalog: MoveCatalog::classic(),
            ..options(3)
        });
        let mon = builder
            .create_combatant("Squirt", ElementalType::Water)
            .unwrap();
        assert_eq!(mon.moves().len(), 2);
    }
}
