use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    common::Fraction,
    error::BattleError,
    mons::{
        ElementalType,
        StatTable,
        StatTarget,
        generate_stats,
    },
    moves::{
        Move,
        MoveCatalog,
    },
    rng::PseudoRandomNumberGenerator,
};

/// A combatant (Mon) participating in a battle.
///
/// Base stats never change after creation. Current stats and health only change through turns
/// executed by a [`Battle`][`crate::battle::Battle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    name: String,
    #[serde(rename = "type")]
    typ: ElementalType,
    base_stats: StatTable,
    stats: StatTable,
    health: u32,
    moves: Vec<Move>,
}

impl Combatant {
    /// Creates a combatant from already-determined stats and moves, at full health.
    pub fn new<S>(
        name: S,
        typ: ElementalType,
        base_stats: StatTable,
        moves: Vec<Move>,
    ) -> Result<Self, BattleError>
    where
        S: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BattleError::InvalidName);
        }
        Ok(Self {
            name,
            typ,
            stats: base_stats.clone(),
            health: base_stats.hp,
            base_stats,
            moves,
        })
    }

    /// Generates a new combatant with random stats and a move set drawn from the catalog.
    ///
    /// Stats are generated before moves, so the random sequence consumed is stable for a given
    /// seed.
    pub fn generate<S>(
        name: S,
        typ: ElementalType,
        catalog: &MoveCatalog,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Self, BattleError>
    where
        S: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BattleError::InvalidName);
        }
        if !catalog.supports(typ) {
            return Err(BattleError::unsupported_type(typ));
        }
        let base_stats = generate_stats(prng);
        let moves = catalog.moves_for(typ, prng)?;
        Self::new(name, typ, base_stats, moves)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn typ(&self) -> ElementalType {
        self.typ
    }

    /// Stats the combatant was created with.
    pub fn base_stats(&self) -> &StatTable {
        &self.base_stats
    }

    /// Stats after any reductions applied during the battle.
    pub fn stats(&self) -> &StatTable {
        &self.stats
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.base_stats.hp
    }

    pub fn fainted(&self) -> bool {
        self.health == 0
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_slot(&self, slot: usize) -> Result<&Move, BattleError> {
        self.moves
            .get(slot)
            .ok_or(BattleError::InvalidMoveSelection {
                slot,
                available: self.moves.len(),
            })
    }

    pub(crate) fn move_slot_mut(&mut self, slot: usize) -> Result<&mut Move, BattleError> {
        let available = self.moves.len();
        self.moves
            .get_mut(slot)
            .ok_or(BattleError::InvalidMoveSelection { slot, available })
    }

    /// Subtracts damage from health, never going below zero.
    ///
    /// Returns the remaining health.
    pub(crate) fn apply_damage(&mut self, damage: u32) -> u32 {
        self.health = self.health.saturating_sub(damage);
        self.health
    }

    /// Multiplies the current value of a stat, truncating the result.
    ///
    /// Returns the stat value before and after the reduction.
    pub(crate) fn reduce_stat(&mut self, target: StatTarget, multiplier: Fraction) -> (u32, u32) {
        let before = self.stats.get(target.into());
        let after = multiplier.floor_mul(before);
        self.stats.set(target.into(), after);
        (before, after)
    }
}

#[cfg(test)]
mod combatant_test {
    use pretty_assertions::assert_eq;

    use crate::{
        common::Fraction,
        error::BattleError,
        mons::{
            Combatant,
            ElementalType,
            StatTable,
            StatTarget,
        },
        moves::{
            Move,
            MoveCatalog,
        },
        rng::RealPseudoRandomNumberGenerator,
    };

    fn stats() -> StatTable {
        StatTable {
            hp: 180,
            atk: 50,
            def: 59,
            spe: 40,
        }
    }

    #[test]
    fn starts_at_full_health_with_base_stats() {
        let mon = Combatant::new(
            "Squirt",
            ElementalType::Water,
            stats(),
            vec![Move::damage("Tackle", ElementalType::Normal, 50)],
        )
        .unwrap();
        assert_eq!(mon.health(), 180);
        assert_eq!(mon.max_health(), 180);
        assert_eq!(mon.stats(), mon.base_stats());
        assert!(!mon.fainted());
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            Combatant::new("  ", ElementalType::Fire, stats(), Vec::new()),
            Err(BattleError::InvalidName)
        );
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(1));
        assert_eq!(
            Combatant::generate("", ElementalType::Fire, &MoveCatalog::full(), &mut prng),
            Err(BattleError::InvalidName)
        );
    }

    #[test]
    fn rejects_unsupported_type_without_consuming_rng() {
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(1));
        assert_eq!(
            Combatant::generate(
                "Blob",
                ElementalType::Normal,
                &MoveCatalog::full(),
                &mut prng
            ),
            Err(BattleError::InvalidTypeSelection("normal".to_owned()))
        );
        let mut fresh = RealPseudoRandomNumberGenerator::new(Some(1));
        assert_eq!(
            Combatant::generate("Blob", ElementalType::Grass, &MoveCatalog::full(), &mut prng),
            Combatant::generate("Blob", ElementalType::Grass, &MoveCatalog::full(), &mut fresh),
        );
    }

    #[test]
    fn generates_four_moves() {
        let mut prng = RealPseudoRandomNumberGenerator::new(None);
        let mon =
            Combatant::generate("Cinder", ElementalType::Fire, &MoveCatalog::full(), &mut prng)
                .unwrap();
        assert_eq!(mon.moves().len(), 4);
        assert_eq!(mon.health(), mon.base_stats().hp);
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut mon = Combatant::new("Sprout", ElementalType::Grass, stats(), Vec::new()).unwrap();
        assert_eq!(mon.apply_damage(30), 150);
        assert_eq!(mon.apply_damage(500), 0);
        assert!(mon.fainted());
    }

    #[test]
    fn stat_reduction_truncates_current_value() {
        let mut mon = Combatant::new("Sprout", ElementalType::Grass, stats(), Vec::new()).unwrap();
        assert_eq!(mon.reduce_stat(StatTarget::Def, Fraction::new(4, 5)), (59, 47));
        assert_eq!(mon.reduce_stat(StatTarget::Def, Fraction::new(4, 5)), (47, 37));
        assert_eq!(mon.stats().def, 37);
        assert_eq!(mon.base_stats().def, 59);
        assert_eq!(mon.stats().atk, 50);
    }

    #[test]
    fn move_slot_out_of_range() {
        let mon = Combatant::new(
            "Sprout",
            ElementalType::Grass,
            stats(),
            vec![Move::damage("Vine Whip", ElementalType::Grass, 50)],
        )
        .unwrap();
        assert_eq!(mon.move_slot(0).map(|m| m.name()), Ok("Vine Whip"));
        assert_eq!(
            mon.move_slot(4).map(|m| m.name()),
            Err(BattleError::InvalidMoveSelection {
                slot: 4,
                available: 1,
            })
        );
    }
}
