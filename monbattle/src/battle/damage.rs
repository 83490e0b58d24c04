use crate::{
    battle::RandomizeDamage,
    mons::{
        Combatant,
        TypeEffectiveness,
        type_effectiveness,
    },
    moves::{
        Move,
        MoveKind,
    },
    rng::{
        PseudoRandomNumberGenerator,
        rand_util,
    },
};

/// Fraction of the defender's maximum health dealt by a neutral, evenly matched hit.
pub const BASE_DAMAGE_RATIO: f64 = 0.15;

/// Move power that deals exactly the base damage.
pub const BASELINE_POWER: f64 = 50.0;

/// Smallest random factor.
pub const MIN_RANDOM_FACTOR: f64 = 0.85;

/// Largest random factor.
pub const MAX_RANDOM_FACTOR: f64 = 1.0;

/// Every factor of a single damage calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageCalculation {
    /// Base damage, a fixed share of the defender's maximum health.
    pub base: f64,
    pub effectiveness: TypeEffectiveness,
    pub type_multiplier: f64,
    pub random_multiplier: f64,
    /// Attacker's current attack over the defender's current defense.
    pub attack_defense_ratio: f64,
    /// Move power relative to [`BASELINE_POWER`].
    pub power_factor: f64,
    /// Final damage dealt, at least 1.
    pub damage: u32,
}

/// The result of calculating damage for a move.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveDamage {
    /// The move does not deal damage.
    None,
    Damage(DamageCalculation),
}

impl MoveDamage {
    /// The amount of damage dealt.
    pub fn damage(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Damage(calculation) => calculation.damage,
        }
    }
}

fn random_multiplier(
    prng: &mut dyn PseudoRandomNumberGenerator,
    randomize: RandomizeDamage,
) -> f64 {
    match randomize {
        RandomizeDamage::Randomize => {
            MIN_RANDOM_FACTOR
                + (MAX_RANDOM_FACTOR - MIN_RANDOM_FACTOR) * rand_util::unit_interval(prng)
        }
        RandomizeDamage::Max => MAX_RANDOM_FACTOR,
        RandomizeDamage::Min => MIN_RANDOM_FACTOR,
    }
}

/// Calculates the damage `attacker` deals to `defender` by using `mov`.
///
/// Stat moves deal no damage and do not advance the random number generator. Damage scales off of
/// the defender's maximum health, while attack and defense use current values so that stat
/// reductions apply.
pub fn calculate_damage(
    attacker: &Combatant,
    defender: &Combatant,
    mov: &Move,
    prng: &mut dyn PseudoRandomNumberGenerator,
    randomize: RandomizeDamage,
) -> MoveDamage {
    let power = match mov.kind() {
        MoveKind::Stat { .. } => return MoveDamage::None,
        MoveKind::Damage { power, .. } | MoveKind::Mega { power, .. } => *power,
    };

    let base = defender.max_health() as f64 * BASE_DAMAGE_RATIO;
    let effectiveness = type_effectiveness(mov.typ(), defender.typ());
    let type_multiplier = effectiveness.multiplier().as_f64();
    let random_multiplier = random_multiplier(prng, randomize);
    let attack_defense_ratio = attacker.stats().atk as f64 / defender.stats().def as f64;
    let power_factor = power as f64 / BASELINE_POWER;

    let damage =
        (base * type_multiplier * random_multiplier * attack_defense_ratio * power_factor).floor();
    // Float to integer casts saturate, so a defense of 0 simply deals the maximum.
    let damage = (damage as u32).max(1);

    let calculation = DamageCalculation {
        base,
        effectiveness,
        type_multiplier,
        random_multiplier,
        attack_defense_ratio,
        power_factor,
        damage,
    };
    log::debug!(
        "{} used {} on {}: {calculation:?}",
        attacker.name(),
        mov.name(),
        defender.name()
    );
    MoveDamage::Damage(calculation)
}
