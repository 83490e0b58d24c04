use std::{
    fmt::{
        self,
        Display,
    },
    str::FromStr,
};

use anyhow::{
    Context,
    Error,
    Result,
};
use monbattle::ElementalType;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("invalid choice: {0}")]
pub struct InvalidChoiceError(String);

/// A choice to use a move, as typed by a player.
///
/// Players number moves from 1, while the battle engine takes a zero-based slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    /// The move slot to use, starting at 0.
    pub slot: usize,
}

impl Display for MoveChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slot + 1)
    }
}

impl FromStr for MoveChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: usize = s.trim().parse().context("invalid move number")?;
        let slot = number
            .checked_sub(1)
            .ok_or_else(|| InvalidChoiceError(s.trim().to_owned()))?;
        Ok(Self { slot })
    }
}

/// A choice of combatant type, either by its number in the menu or by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeChoice {
    /// Menu number, starting at 1.
    Number(usize),
    Type(ElementalType),
}

impl TypeChoice {
    /// Resolves the choice against the types offered in the menu.
    pub fn resolve(&self, menu: &[ElementalType]) -> Option<ElementalType> {
        match self {
            Self::Number(number) => number.checked_sub(1).and_then(|i| menu.get(i)).cloned(),
            Self::Type(typ) => menu.contains(typ).then_some(*typ),
        }
    }
}

impl FromStr for TypeChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse() {
            return Ok(Self::Number(number));
        }
        let typ = ElementalType::from_str(s).map_err(|_| InvalidChoiceError(s.to_owned()))?;
        Ok(Self::Type(typ))
    }
}
