use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move, which controls what happens when it is used.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    /// Deals damage to the target.
    #[string = "damage"]
    Damage,
    /// Reduces one of the target's stats.
    #[string = "stat"]
    Stat,
    /// A limited-use signature attack.
    #[string = "mega"]
    Mega,
}

#[cfg(test)]
mod move_category_test {
    use crate::{
        common::{
            test_string_deserialization,
            test_string_serialization,
        },
        moves::MoveCategory,
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(MoveCategory::Damage, "damage");
        test_string_serialization(MoveCategory::Stat, "stat");
        test_string_serialization(MoveCategory::Mega, "mega");
    }

    #[test]
    fn deserializes_capitalized() {
        test_string_deserialization("Damage", MoveCategory::Damage);
        test_string_deserialization("Mega", MoveCategory::Mega);
    }
}
