use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    common::Fraction,
    error::BattleError,
    mons::{
        ElementalType,
        StatTarget,
    },
    moves::Move,
    rng::{
        PseudoRandomNumberGenerator,
        rand_util,
    },
};

struct DamageEntry {
    name: &'static str,
    power: u32,
}

struct StatEntry {
    name: &'static str,
    target: StatTarget,
}

const fn damage(name: &'static str, power: u32) -> DamageEntry {
    DamageEntry { name, power }
}

const fn stat(name: &'static str, target: StatTarget) -> StatEntry {
    StatEntry { name, target }
}

const WATER_MOVES: &[DamageEntry] = &[
    damage("Aqua Blast", 45),
    damage("Hydro Pump", 55),
    damage("Water Whip", 40),
    damage("Bubble Beam", 50),
];

const FIRE_MOVES: &[DamageEntry] = &[
    damage("Flame Thrower", 50),
    damage("Fire Blast", 55),
    damage("Ember", 40),
    damage("Heat Wave", 45),
];

const GRASS_MOVES: &[DamageEntry] = &[
    damage("Leaf Strike", 45),
    damage("Solar Beam", 55),
    damage("Root Bind", 40),
    damage("Vine Whip", 50),
];

const NORMAL_MOVES: &[DamageEntry] = &[
    damage("Quick Attack", 45),
    damage("Tackle", 50),
    damage("Slam", 55),
    damage("Body Slam", 40),
];

const STAT_MOVES: &[StatEntry] = &[
    stat("Growl", StatTarget::Atk),
    stat("Leer", StatTarget::Def),
    stat("Tail Whip", StatTarget::Def),
    stat("Baby-Doll Eyes", StatTarget::Atk),
];

/// Multiplier applied by every stat move in the catalog.
pub const STAT_MOVE_MULTIPLIER: Fraction = Fraction::new(4, 5);

/// Power of every signature move.
pub const MEGA_MOVE_POWER: u32 = 85;

/// Number of times a signature move can be used in a battle.
pub const MEGA_MOVE_USES: u32 = 1;

/// The static table of moves combatants are built from.
///
/// The catalog always hands out one damage move of the combatant's own type followed by one normal
/// damage move. The remaining slots depend on the catalog's capabilities: a stat move drawn from a
/// shared pool, then the combatant type's signature mega move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCatalog {
    /// Hand out a stat move.
    #[serde(default)]
    pub stat_moves: bool,
    /// Hand out a signature mega move.
    #[serde(default)]
    pub mega_moves: bool,
}

impl Default for MoveCatalog {
    fn default() -> Self {
        Self::full()
    }
}

impl MoveCatalog {
    /// The full catalog: damage, damage, stat, mega.
    pub fn full() -> Self {
        Self {
            stat_moves: true,
            mega_moves: true,
        }
    }

    /// The classic catalog: only the two damage moves.
    pub fn classic() -> Self {
        Self {
            stat_moves: false,
            mega_moves: false,
        }
    }

    /// The number of moves every combatant receives from this catalog.
    pub fn move_set_size(&self) -> usize {
        2 + self.stat_moves as usize + self.mega_moves as usize
    }

    /// Types a combatant may be created with.
    pub fn selectable_types(&self) -> impl Iterator<Item = ElementalType> {
        ElementalType::ALL
            .into_iter()
            .filter(|typ| Self::type_pool(*typ).is_some())
    }

    /// Checks if a combatant of the given type can be built from the catalog.
    pub fn supports(&self, typ: ElementalType) -> bool {
        Self::type_pool(typ).is_some()
    }

    fn type_pool(typ: ElementalType) -> Option<&'static [DamageEntry]> {
        match typ {
            ElementalType::Water => Some(WATER_MOVES),
            ElementalType::Fire => Some(FIRE_MOVES),
            ElementalType::Grass => Some(GRASS_MOVES),
            ElementalType::Normal => None,
        }
    }

    fn mega_move_name(typ: ElementalType) -> Option<&'static str> {
        match typ {
            ElementalType::Water => Some("Tidal Crash"),
            ElementalType::Fire => Some("Inferno Burst"),
            ElementalType::Grass => Some("Verdant Storm"),
            ElementalType::Normal => None,
        }
    }

    /// Draws a move set for a combatant of the given type.
    pub fn moves_for(
        &self,
        typ: ElementalType,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Vec<Move>, BattleError> {
        let unsupported = || BattleError::unsupported_type(typ);
        let pool = Self::type_pool(typ).ok_or_else(unsupported)?;
        let mut moves = Vec::with_capacity(self.move_set_size());

        let entry = rand_util::sample_slice(prng, pool).ok_or_else(unsupported)?;
        moves.push(Move::damage(entry.name, typ, entry.power));

        let entry = rand_util::sample_slice(prng, NORMAL_MOVES).ok_or_else(unsupported)?;
        moves.push(Move::damage(
            entry.name,
            ElementalType::Normal,
            entry.power,
        ));

        if self.stat_moves {
            let entry = rand_util::sample_slice(prng, STAT_MOVES).ok_or_else(unsupported)?;
            moves.push(Move::stat(
                entry.name,
                entry.target,
                STAT_MOVE_MULTIPLIER,
            )?);
        }

        if self.mega_moves {
            if let Some(name) = Self::mega_move_name(typ) {
                moves.push(Move::mega(name, typ, MEGA_MOVE_POWER, MEGA_MOVE_USES)?);
            }
        }

        log::trace!(
            "drew moves for {typ}: {}",
            moves.iter().map(|m| m.name()).join(", ")
        );
        Ok(moves)
    }
}
