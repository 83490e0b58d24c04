use std::fmt::{
    self,
    Display,
};

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
    moves::MoveCategory,
};

/// How many more times a move can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveUses {
    /// The move can be used any number of times.
    Unlimited,
    /// The move can be used `limit` times in total.
    Limited { limit: u32, remaining: u32 },
}

impl MoveUses {
    /// A fresh usage counter for a move usable `limit` times.
    pub fn limited(limit: u32) -> Self {
        Self::Limited {
            limit,
            remaining: limit,
        }
    }

    /// The number of uses remaining, or [`None`] if unlimited.
    pub fn remaining(&self) -> Option<u32> {
        match self {
            Self::Unlimited => None,
            Self::Limited { remaining, .. } => Some(*remaining),
        }
    }

    /// The total usage limit, or [`None`] if unlimited.
    pub fn limit(&self) -> Option<u32> {
        match self {
            Self::Unlimited => None,
            Self::Limited { limit, .. } => Some(*limit),
        }
    }

    /// Checks if the move can no longer be used.
    pub fn is_depleted(&self) -> bool {
        self.remaining() == Some(0)
    }

    /// Checks that the limit is positive and the remaining count does not exceed it.
    pub fn validate(&self) -> Result<(), &'static str> {
        match *self {
            Self::Unlimited => Ok(()),
            Self::Limited { limit: 0, .. } => Err("usage limit must be positive"),
            Self::Limited { limit, remaining } if remaining > limit => {
                Err("remaining uses exceed the usage limit")
            }
            Self::Limited { .. } => Ok(()),
        }
    }

    fn consume(&mut self) {
        if let Self::Limited { remaining, .. } = self {
            *remaining = remaining.saturating_sub(1);
        }
    }
}

impl Display for MoveUses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "unlimited"),
            Self::Limited { limit, remaining } => write!(f, "{remaining}/{limit}"),
        }
    }
}

/// A stat reduction applied to the target of a stat move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEffect {
    /// The stat to reduce.
    pub target: StatTarget,
    /// The factor the target's current stat is multiplied by, in `(0, 1]`.
    pub multiplier: Fraction,
}

impl StatEffect {
    /// Checks that the multiplier lowers the stat, without zeroing it outright.
    pub fn validate(&self) -> Result<(), &'static str> {
        let (num, den) = (
            self.multiplier.numerator(),
            self.multiplier.denominator(),
        );
        if den == 0 {
            return Err("stat multiplier has a zero denominator");
        }
        if num == 0 || num > den {
            return Err("stat multiplier must be in (0, 1]");
        }
        Ok(())
    }
}

/// What a move does, along with the data only that kind of move carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum MoveKind {
    Damage {
        #[serde(rename = "type")]
        typ: ElementalType,
        power: u32,
        uses: MoveUses,
    },
    Stat {
        effect: StatEffect,
    },
    Mega {
        #[serde(rename = "type")]
        typ: ElementalType,
        power: u32,
        uses: MoveUses,
    },
}

/// A move in a combatant's move set.
///
/// Every constructor, including deserialization, rejects moves with an invalid stat multiplier or
/// usage counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedMove")]
pub struct Move {
    name: String,
    #[serde(flatten)]
    kind: MoveKind,
}

#[derive(Deserialize)]
struct UncheckedMove {
    name: String,
    #[serde(flatten)]
    kind: MoveKind,
}

impl TryFrom<UncheckedMove> for Move {
    type Error = BattleError;
    fn try_from(value: UncheckedMove) -> Result<Self, Self::Error> {
        Self::checked(value.name, value.kind)
    }
}

impl Move {
    fn checked(name: String, kind: MoveKind) -> Result<Self, BattleError> {
        let mov = Self { name, kind };
        mov.validate()?;
        Ok(mov)
    }

    /// Checks the stat effect and usage counter of the move.
    pub fn validate(&self) -> Result<(), BattleError> {
        let result = match &self.kind {
            MoveKind::Damage { uses, .. } | MoveKind::Mega { uses, .. } => uses.validate(),
            MoveKind::Stat { effect } => effect.validate(),
        };
        result.map_err(|reason| BattleError::InvalidMove {
            name: self.name.clone(),
            reason,
        })
    }

    /// Creates a damaging move with unlimited uses.
    pub fn damage<S>(name: S, typ: ElementalType, power: u32) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: MoveKind::Damage {
                typ,
                power,
                uses: MoveUses::Unlimited,
            },
        }
    }

    /// Creates a normal-type stat move with unlimited uses.
    pub fn stat<S>(
        name: S,
        target: StatTarget,
        multiplier: Fraction,
    ) -> Result<Self, BattleError>
    where
        S: Into<String>,
    {
        Self::checked(
            name.into(),
            MoveKind::Stat {
                effect: StatEffect { target, multiplier },
            },
        )
    }

    /// Creates a signature move that can only be used `limit` times.
    pub fn mega<S>(
        name: S,
        typ: ElementalType,
        power: u32,
        limit: u32,
    ) -> Result<Self, BattleError>
    where
        S: Into<String>,
    {
        Self::checked(
            name.into(),
            MoveKind::Mega {
                typ,
                power,
                uses: MoveUses::limited(limit),
            },
        )
    }

    /// Overrides the usage limit of the move.
    ///
    /// Stat moves are always unlimited, so this has no effect on them.
    pub fn with_uses(mut self, new_uses: MoveUses) -> Result<Self, BattleError> {
        match &mut self.kind {
            MoveKind::Damage { uses, .. } | MoveKind::Mega { uses, .. } => *uses = new_uses,
            MoveKind::Stat { .. } => (),
        }
        self.validate()?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &MoveKind {
        &self.kind
    }

    /// The elemental type of the move.
    ///
    /// Stat moves are always normal type.
    pub fn typ(&self) -> ElementalType {
        match &self.kind {
            MoveKind::Damage { typ, .. } | MoveKind::Mega { typ, .. } => *typ,
            MoveKind::Stat { .. } => ElementalType::Normal,
        }
    }

    /// The power of the move. Stat moves have no power.
    pub fn power(&self) -> u32 {
        match &self.kind {
            MoveKind::Damage { power, .. } | MoveKind::Mega { power, .. } => *power,
            MoveKind::Stat { .. } => 0,
        }
    }

    pub fn category(&self) -> MoveCategory {
        match &self.kind {
            MoveKind::Damage { .. } => MoveCategory::Damage,
            MoveKind::Stat { .. } => MoveCategory::Stat,
            MoveKind::Mega { .. } => MoveCategory::Mega,
        }
    }

    pub fn uses(&self) -> MoveUses {
        match &self.kind {
            MoveKind::Damage { uses, .. } | MoveKind::Mega { uses, .. } => *uses,
            MoveKind::Stat { .. } => MoveUses::Unlimited,
        }
    }

    pub fn stat_effect(&self) -> Option<&StatEffect> {
        match &self.kind {
            MoveKind::Stat { effect } => Some(effect),
            _ => None,
        }
    }

    /// Checks that the move can be used.
    pub fn check_usable(&self) -> Result<(), BattleError> {
        if self.uses().is_depleted() {
            return Err(BattleError::MoveDepleted {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Records one use of the move.
    pub(crate) fn consume_use(&mut self) -> Result<(), BattleError> {
        self.check_usable()?;
        match &mut self.kind {
            MoveKind::Damage { uses, .. } | MoveKind::Mega { uses, .. } => uses.consume(),
            MoveKind::Stat { .. } => (),
        }
        Ok(())
    }
}
