use std::{
    cmp,
    fmt,
    fmt::Display,
    str::FromStr,
};

use num::Integer;
use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::{
        Unexpected,
        Visitor,
    },
};

/// An exact rational number, used for multipliers in battle calculations.
///
/// A fraction is serializable as:
/// - A fraction string (`"4/5"`).
/// - An integer (`2`), which represents an integer (denominator == 1).
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    num: u32,
    den: u32,
}

impl Fraction {
    /// Creates a new fraction.
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// The numerator of the fraction.
    pub fn numerator(&self) -> u32 {
        self.num
    }

    /// The denominator of the fraction.
    pub fn denominator(&self) -> u32 {
        self.den
    }

    /// Is the fraction whole (i.e., an integer)?
    pub fn is_whole(&self) -> bool {
        self.den == 1
    }

    /// Simplifies the fraction.
    pub fn simplify(&self) -> Self {
        let gcd = self.num.gcd(&self.den);
        if gcd == 0 {
            return *self;
        }
        Self::new(self.num / gcd, self.den / gcd)
    }

    /// Multiplies an integer by the fraction, truncating the result.
    ///
    /// The intermediate product is computed in 64 bits. Results that do not fit, including any
    /// nonzero product over a zero denominator, saturate at [`u32::MAX`].
    pub fn floor_mul(&self, value: u32) -> u32 {
        let product = value as u64 * self.num as u64;
        match product.checked_div(self.den as u64) {
            Some(result) => result.min(u32::MAX as u64) as u32,
            None if product == 0 => 0,
            None => u32::MAX,
        }
    }

    /// The floating point value of the fraction.
    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    fn cross(a: &Self, b: &Self) -> (u64, u64) {
        (a.num as u64 * b.den as u64, b.num as u64 * a.den as u64)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl From<u32> for Fraction {
    fn from(value: u32) -> Self {
        Self::new(value, 1)
    }
}

impl FromStr for Fraction {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|err| format!("invalid fraction {s}: {err}"))
        };
        match s.split_once('/') {
            Some((num, den)) => {
                let den = parse(den)?;
                if den == 0 {
                    return Err(format!("invalid fraction {s}: zero denominator"));
                }
                Ok(Self::new(parse(num)?, den))
            }
            None => Ok(Self::from(parse(s)?)),
        }
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = Self::cross(self, other);
        a == b
    }
}

impl Eq for Fraction {}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        let (a, b) = Self::cross(self, other);
        a.cmp(&b)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let simplified = self.simplify();
        if simplified.is_whole() {
            serializer.serialize_u32(simplified.num)
        } else {
            serializer.serialize_str(&format!("{simplified}"))
        }
    }
}

struct FractionVisitor;

impl<'de> Visitor<'de> for FractionVisitor {
    type Value = Fraction;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer or a fraction string")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u32::try_from(v)
            .map(Fraction::from)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Fraction::from_str(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(FractionVisitor)
    }
}
