use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::common::Fraction;

/// The elemental type of a combatant or move.
///
/// Water, fire and grass form a closed advantage cycle. Normal never attacks or defends with an
/// advantage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum ElementalType {
    #[string = "water"]
    Water,
    #[string = "fire"]
    Fire,
    #[string = "grass"]
    Grass,
    #[string = "normal"]
    Normal,
}

impl ElementalType {
    /// Every type, in menu order.
    pub const ALL: [ElementalType; 4] = [Self::Water, Self::Fire, Self::Grass, Self::Normal];

    /// The type this type is strong against, if any.
    pub fn beats(&self) -> Option<ElementalType> {
        match self {
            Self::Water => Some(Self::Fire),
            Self::Fire => Some(Self::Grass),
            Self::Grass => Some(Self::Water),
            Self::Normal => None,
        }
    }
}

/// Type effectiveness of an attacking type against a defending type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeEffectiveness {
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The damage multiplier for this effectiveness.
    pub fn multiplier(&self) -> Fraction {
        match self {
            Self::Weak => Fraction::new(1, 2),
            Self::Normal => Fraction::from(1),
            Self::Strong => Fraction::new(3, 2),
        }
    }
}

/// Looks up the effectiveness of a move of type `attack` against a combatant of type `defense`.
pub fn type_effectiveness(attack: ElementalType, defense: ElementalType) -> TypeEffectiveness {
    if attack.beats() == Some(defense) {
        TypeEffectiveness::Strong
    } else if defense.beats() == Some(attack) {
        TypeEffectiveness::Weak
    } else {
        TypeEffectiveness::Normal
    }
}
