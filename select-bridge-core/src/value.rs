//! Fuzzy structural equality over widget values
//!
//! Widgets report their values as strings even when the caller supplied
//! numbers, so value synchronization and change detection compare with a
//! loose, type-coercing equality instead of `==`.
//!
//! Rules:
//! - `null` only equals `null`
//! - strings, numbers and booleans compare after scalar coercion
//!   (`"1" == 1`, `" 2 " == 2`, `"" == 0`, `true == 1`)
//! - arrays compare element-wise, order-sensitive
//! - objects compare key sets, then values recursively
//! - arrays and objects never equal scalars

use serde_json::{Map, Number, Value};

/// Loose, type-coercing structural equality
///
/// # Example
///
/// ```
/// use select_bridge_core::FuzzyEq;
/// use serde_json::json;
///
/// assert!(json!("1").fuzzy_eq(&json!(1)));
/// assert!(json!(["1", 2]).fuzzy_eq(&json!([1, "2"])));
/// assert!(!json!([1, 2]).fuzzy_eq(&json!([2, 1])));
/// ```
pub trait FuzzyEq<Rhs: ?Sized = Self> {
    fn fuzzy_eq(&self, other: &Rhs) -> bool;

    fn fuzzy_ne(&self, other: &Rhs) -> bool {
        !self.fuzzy_eq(other)
    }
}

impl FuzzyEq for Value {
    fn fuzzy_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            (Value::Array(a), Value::Array(b)) => a.as_slice().fuzzy_eq(b.as_slice()),
            (Value::Object(a), Value::Object(b)) => a.fuzzy_eq(b),
            (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => {
                false
            }
            (a, b) => scalar_eq(a, b),
        }
    }
}

impl<T: FuzzyEq> FuzzyEq for [T] {
    fn fuzzy_eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.fuzzy_eq(b))
    }
}

impl<T: FuzzyEq> FuzzyEq for Vec<T> {
    fn fuzzy_eq(&self, other: &Vec<T>) -> bool {
        self.as_slice().fuzzy_eq(other.as_slice())
    }
}

impl<T: FuzzyEq> FuzzyEq for Option<T> {
    fn fuzzy_eq(&self, other: &Option<T>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.fuzzy_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl FuzzyEq for Map<String, Value> {
    fn fuzzy_eq(&self, other: &Map<String, Value>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, a)| other.get(key).is_some_and(|b| a.fuzzy_eq(b)))
    }
}

fn scalar_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_eq(a, b),
        _ => match (to_number(a), to_number(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

fn number_eq(a: &Number, b: &Number) -> bool {
    match (a.as_i64(), b.as_i64()) {
        (Some(a), Some(b)) => a == b,
        _ => a.as_f64() == b.as_f64(),
    }
}

/// Numeric coercion of a scalar, `None` when the value has no numeric reading
fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
        _ => None,
    }
}

/// Display a scalar the way a widget would show it
///
/// Strings are shown unquoted, numbers in their shortest form and
/// `null`/booleans as an empty label.
pub fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Null | Value::Bool(_) => String::new(),
        other => other.to_string(),
    }
}
