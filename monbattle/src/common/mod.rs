mod fraction;
mod test_util;

pub use fraction::Fraction;
#[cfg(test)]
pub use test_util::{
    test_deserialization,
    test_serialization,
    test_string_deserialization,
    test_string_serialization,
};
