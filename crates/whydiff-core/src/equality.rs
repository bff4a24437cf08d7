//! Equality tiers, cheapest first.
//!
//! | tier      | scalars                          | composites                     |
//! |-----------|----------------------------------|--------------------------------|
//! | identity  | strict (`NaN != NaN`, `0 == -0`) | same allocation                |
//! | loose     | coercive (`"1" == 1`)            | coerced to string vs primitive |
//! | shallow   | same-value                       | same keys, same-value members  |
//! | deep      | same-value-zero                  | recursive, key order ignored   |

use crate::value::{string_to_number, Shape, Value};
use std::rc::Rc;

/// Strict identity: scalars by value, composites by allocation
pub fn identity_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Function(x), Value::Function(y)) => Rc::ptr_eq(x, y),
        (Value::Array(x), Value::Array(y)) => Rc::ptr_eq(x, y),
        (Value::Object(x), Value::Object(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

/// Same-value: identity, except `NaN` equals itself and `0` differs from `-0`
fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if x.is_nan() && y.is_nan() {
                true
            } else {
                x == y && x.is_sign_negative() == y.is_sign_negative()
            }
        }
        _ => identity_eq(a, b),
    }
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b) || (a.is_composite() && b.is_composite())
}

/// Coercive equality
///
/// `null` and `undefined` only equal each other. Booleans become 0/1,
/// strings compared with numbers are converted numerically, and a composite
/// compared with a primitive is first rendered to its primitive string.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
        _ if same_kind(a, b) => identity_eq(a, b),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            *n == string_to_number(s)
        }
        (Value::Bool(flag), other) | (other, Value::Bool(flag)) => {
            let as_number = Value::Number(if *flag { 1.0 } else { 0.0 });
            loose_eq(&as_number, other)
        }
        (composite, primitive @ (Value::Number(_) | Value::String(_)))
        | (primitive @ (Value::Number(_) | Value::String(_)), composite)
            if composite.is_composite() =>
        {
            let coerced = Value::string(composite.to_primitive_string());
            loose_eq(&coerced, primitive)
        }
        _ => false,
    }
}

/// One-level member equality
///
/// True when the values are same-value, or when both are arrays/objects with
/// the same own keys (array indices count as keys) whose members are
/// same-value. Callables and primitives never qualify beyond same-value.
pub fn shallow_eq(a: &Value, b: &Value) -> bool {
    if same_value(a, b) {
        return true;
    }
    match (a.shape(), b.shape()) {
        (Shape::Sequence(x), Shape::Sequence(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(p, q)| same_value(p, q))
        }
        (Shape::Record(x), Shape::Record(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, p)| y.get(key).is_some_and(|q| same_value(p, q)))
        }
        (Shape::Sequence(seq), Shape::Record(rec)) | (Shape::Record(rec), Shape::Sequence(seq)) => {
            seq.len() == rec.len()
                && seq.iter().enumerate().all(|(index, p)| {
                    rec.get(index.to_string().as_str())
                        .is_some_and(|q| same_value(p, q))
                })
        }
        _ => false,
    }
}

/// Full structural equality, unbounded depth
///
/// Arrays never equal objects, callables compare by identity, object key
/// order is ignored and `NaN` equals `NaN`.
pub fn deep_eq(a: &Value, b: &Value) -> bool {
    if identity_eq(a, b) {
        return true;
    }
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.is_nan() && y.is_nan(),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(p, q)| deep_eq(p, q))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, p)| y.get(key).is_some_and(|q| deep_eq(p, q)))
        }
        _ => false,
    }
}
