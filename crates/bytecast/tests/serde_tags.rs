//! Numeric types and values as they appear in JSON configuration.

#![cfg(feature = "serde")]

use bytecast::{Numeric, NumericType};
use serde_json::json;

#[test]
fn numeric_type_uses_its_tag() {
    assert_eq!(serde_json::to_value(NumericType::I64).unwrap(), json!("i64"));
    let ty: NumericType = serde_json::from_value(json!("f32")).unwrap();
    assert_eq!(ty, NumericType::F32);
    assert!(serde_json::from_value::<NumericType>(json!("bogus")).is_err());
}

#[test]
fn numeric_is_adjacently_tagged() {
    let value = Numeric::U64(u64::MAX);
    let encoded = serde_json::to_value(value).unwrap();
    assert_eq!(encoded, json!({ "type": "u64", "value": u64::MAX }));
    let decoded: Numeric = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, value);
}
