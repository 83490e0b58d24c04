use thiserror::Error;

use crate::mons::ElementalType;

/// An error returned by the battle engine.
///
/// No error is fatal: a rejected operation leaves every combatant and the battle untouched, so the
/// caller may simply ask for another selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// The requested type cannot be given to a combatant.
    #[error("invalid type selection: {0}")]
    InvalidTypeSelection(String),
    /// A combatant must have a non-empty name.
    #[error("combatant name cannot be empty")]
    InvalidName,
    /// The move slot does not exist on the active combatant.
    #[error("invalid move selection: slot {slot} (combatant has {available} moves)")]
    InvalidMoveSelection { slot: usize, available: usize },
    /// The selected move has no uses remaining.
    #[error("{name} has no uses remaining")]
    MoveDepleted { name: String },
    /// The move data breaks a move invariant.
    #[error("invalid move {name}: {reason}")]
    InvalidMove { name: String, reason: &'static str },
    /// No more turns can be executed.
    #[error("battle is already finished")]
    BattleFinished,
    /// A battle requires exactly two combatants.
    #[error("a battle requires exactly 2 combatants, found {0}")]
    CombatantCount(usize),
}

impl BattleError {
    pub(crate) fn unsupported_type(typ: ElementalType) -> Self {
        Self::InvalidTypeSelection(typ.to_string())
    }
}
