use std::ops::Range;

use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::rng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

/// A single stat value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "atk"]
    Atk,
    #[string = "def"]
    Def,
    #[string = "spe"]
    Spe,
}

/// A stat that moves are allowed to reduce.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum StatTarget {
    #[string = "atk"]
    Atk,
    #[string = "def"]
    Def,
}

impl From<StatTarget> for Stat {
    fn from(value: StatTarget) -> Self {
        match value {
            StatTarget::Atk => Self::Atk,
            StatTarget::Def => Self::Def,
        }
    }
}

/// A full stat table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spe: u32,
}

impl StatTable {
    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the value for the given stat.
    pub fn set(&mut self, stat: Stat, value: u32) {
        match stat {
            Stat::HP => self.hp = value,
            Stat::Atk => self.atk = value,
            Stat::Def => self.def = value,
            Stat::Spe => self.spe = value,
        }
    }
}

/// Range of generated health values.
pub const HP_RANGE: Range<u32> = 150..200;
/// Range of generated attack values.
pub const ATK_RANGE: Range<u32> = 40..60;
/// Range of generated defense values.
pub const DEF_RANGE: Range<u32> = 40..60;
/// Range of generated speed values.
pub const SPE_RANGE: Range<u32> = 30..60;

fn roll(prng: &mut dyn PseudoRandomNumberGenerator, range: Range<u32>) -> u32 {
    rand_util::range(prng, range.start as u64, range.end as u64) as u32
}

/// Generates a random stat table for a new combatant.
///
/// Stats are rolled in table order (health, attack, defense, speed), each uniformly within its own
/// range.
pub fn generate_stats(prng: &mut dyn PseudoRandomNumberGenerator) -> StatTable {
    let stats = StatTable {
        hp: roll(prng, HP_RANGE),
        atk: roll(prng, ATK_RANGE),
        def: roll(prng, DEF_RANGE),
        spe: roll(prng, SPE_RANGE),
    };
    log::trace!("generated stats: {stats:?}");
    stats
}
