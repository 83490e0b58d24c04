#![cfg(test)]

use std::fmt::{
    Debug,
    Display,
};

use serde::{
    Serialize,
    de::DeserializeOwned,
};

#[track_caller]
pub fn test_deserialization<T>(s: &str, expected: T)
where
    T: Debug + PartialEq + DeserializeOwned,
{
    let got = serde_json::from_str::<T>(s).unwrap();
    assert_eq!(got, expected);
}

#[track_caller]
pub fn test_serialization<T, S>(v: T, expected: S)
where
    T: Debug + PartialEq + Serialize + DeserializeOwned,
    S: Display,
{
    let got = serde_json::to_string(&v).unwrap();
    assert_eq!(got, format!("{expected}"));
    test_deserialization(&got, v);
}

#[track_caller]
pub fn test_string_deserialization<T>(s: &str, expected: T)
where
    T: Debug + PartialEq + DeserializeOwned,
{
    test_deserialization(&format!("\"{s}\""), expected)
}

#[track_caller]
pub fn test_string_serialization<T>(v: T, expected: &str)
where
    T: Debug + PartialEq + Serialize + DeserializeOwned,
{
    test_serialization(v, format!("\"{expected}\""))
}
