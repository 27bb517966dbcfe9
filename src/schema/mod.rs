//! Runtime shape validation for untyped content records.
//!
//! Content records arrive as untrusted JSON. Before they are deserialized
//! into typed [`crate::record`] structs, they are checked against a
//! declarative [`Shape`]: a closed tagged union combining primitives, string
//! format refinements, optional wrapping, arrays, literal unions and object
//! composition. A [`Validator`] interprets the shape with a single generic
//! `check` function, so all content kinds stay consistent and extensible.
//!
//! Validation is structural, not exact-shape: unknown extra fields pass.
//! `check` is total - it returns `false` for any malformed input and never
//! panics.

pub mod content;

use serde_json::Value;

use crate::utils::date::DateTimeUtc;

/// Declarative description of an expected JSON structure.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Any JSON string.
    String,
    /// A string holding a valid ISO calendar date (`YYYY-MM-DD`).
    Date,
    /// A JSON boolean.
    Bool,
    /// Field may be absent; when present it must match the inner shape.
    Optional(Box<Shape>),
    /// A JSON array whose elements all match the item shape.
    Array(Box<Shape>),
    /// A string drawn from a fixed literal set.
    Literal(&'static [&'static str]),
    /// A JSON object with the given named fields (extra fields permitted).
    Object(Vec<Field>),
    /// Both shapes must match (object composition).
    Intersect(Box<Shape>, Box<Shape>),
}

impl Shape {
    pub fn optional(inner: Shape) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn array(item: Shape) -> Self {
        Self::Array(Box::new(item))
    }

    pub fn intersect(a: Shape, b: Shape) -> Self {
        Self::Intersect(Box::new(a), Box::new(b))
    }
}

/// A named field within an object shape.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
}

impl Field {
    /// Required field: must be present and match.
    pub fn required(name: &'static str, shape: Shape) -> Self {
        Self { name, shape }
    }

    /// Optional field: may be absent; when present it must match.
    pub fn optional(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape: Shape::optional(shape),
        }
    }
}

/// A compiled shape, ready to check untyped values.
///
/// Holds no mutable state: checking the same value always yields the same
/// result, and validators are safe to share across threads.
#[derive(Debug, Clone)]
pub struct Validator {
    shape: Shape,
}

impl Validator {
    pub fn compile(shape: Shape) -> Self {
        Self { shape }
    }

    /// Check a value against the compiled shape.
    ///
    /// Returns `false` for any mismatch (wrong primitive kind, missing
    /// required field, invalid date string, literal outside the allowed
    /// set). Never panics.
    pub fn check(&self, value: &Value) -> bool {
        check_shape(&self.shape, value)
    }
}

fn check_shape(shape: &Shape, value: &Value) -> bool {
    match shape {
        Shape::String => value.is_string(),
        Shape::Date => value
            .as_str()
            .is_some_and(|s| s.len() == 10 && DateTimeUtc::parse(s).is_some()),
        Shape::Bool => value.is_boolean(),
        // Presence is handled at the object level; a present value must
        // match the inner shape (null is not a valid stand-in).
        Shape::Optional(inner) => check_shape(inner, value),
        Shape::Array(item) => value
            .as_array()
            .is_some_and(|items| items.iter().all(|v| check_shape(item, v))),
        Shape::Literal(options) => value.as_str().is_some_and(|s| options.contains(&s)),
        Shape::Object(fields) => {
            let Some(map) = value.as_object() else {
                return false;
            };
            fields.iter().all(|field| match map.get(field.name) {
                Some(v) => check_shape(&field.shape, v),
                None => matches!(field.shape, Shape::Optional(_)),
            })
        }
        Shape::Intersect(a, b) => check_shape(a, value) && check_shape(b, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person() -> Validator {
        Validator::compile(Shape::Object(vec![
            Field::required("name", Shape::String),
            Field::optional("bio", Shape::String),
            Field::required("active", Shape::Bool),
        ]))
    }

    #[test]
    fn test_object_required_fields() {
        let v = person();
        assert!(v.check(&json!({"name": "ada", "active": true})));
        assert!(!v.check(&json!({"name": "ada"})));
        assert!(!v.check(&json!({"active": true})));
    }

    #[test]
    fn test_optional_field_present_must_match() {
        let v = person();
        assert!(v.check(&json!({"name": "ada", "active": true, "bio": "hi"})));
        assert!(!v.check(&json!({"name": "ada", "active": true, "bio": 42})));
        // null is not a valid stand-in for an absent optional
        assert!(!v.check(&json!({"name": "ada", "active": true, "bio": null})));
    }

    #[test]
    fn test_extra_fields_pass() {
        let v = person();
        assert!(v.check(&json!({"name": "ada", "active": true, "whatever": [1, 2]})));
    }

    #[test]
    fn test_totality_on_root_mismatch() {
        let v = person();
        assert!(!v.check(&json!(null)));
        assert!(!v.check(&json!([])));
        assert!(!v.check(&json!("string")));
        assert!(!v.check(&json!(3.14)));
    }

    #[test]
    fn test_date_refinement() {
        let v = Validator::compile(Shape::Date);
        assert!(v.check(&json!("2020-01-15")));
        assert!(!v.check(&json!("2020-13-45")));
        assert!(!v.check(&json!("2020-1-15")));
        assert!(!v.check(&json!("2020-01-15T10:00:00Z")));
        assert!(!v.check(&json!(20200115)));
    }

    #[test]
    fn test_literal_union() {
        let v = Validator::compile(Shape::Literal(&["left", "right"]));
        assert!(v.check(&json!("left")));
        assert!(!v.check(&json!("center")));
        assert!(!v.check(&json!(1)));
    }

    #[test]
    fn test_array_of_shape() {
        let v = Validator::compile(Shape::array(Shape::String));
        assert!(v.check(&json!([])));
        assert!(v.check(&json!(["a", "b"])));
        assert!(!v.check(&json!(["a", 2])));
        assert!(!v.check(&json!("a")));
    }

    #[test]
    fn test_intersect_merges_objects() {
        let v = Validator::compile(Shape::intersect(
            Shape::Object(vec![Field::required("a", Shape::String)]),
            Shape::Object(vec![Field::required("b", Shape::Bool)]),
        ));
        assert!(v.check(&json!({"a": "x", "b": false})));
        assert!(!v.check(&json!({"a": "x"})));
        assert!(!v.check(&json!({"b": true})));
    }

    #[test]
    fn test_determinism() {
        let v = person();
        let value = json!({"name": "ada", "active": true});
        let first = v.check(&value);
        for _ in 0..3 {
            assert_eq!(v.check(&value), first);
        }
    }
}
