use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Number, Value as Json};

use crate::attr_type::AttrType;
use crate::error::TypeError;
use crate::object::ObjectValue;

/// Placeholder Terraform's legacy shims use for a value that is not yet known.
///
/// [`Value::from_json`] decodes this string as [`Value::Unknown`] and
/// [`Value::to_json`] encodes unknowns back to it.
pub const UNKNOWN_VALUE: &str = "74D93920-ED26-11E3-AC10-0800200C9A66";

/// A typed attribute value.
///
/// `Null` and `Unknown` carry the type they stand in for, so every value has
/// a type even when it holds no data. An unknown value is one that will only
/// be determined later (e.g. after apply); it is never equivalent to null.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Null(AttrType),
    Unknown(AttrType),
    String(String),
    Number(Number),
    Bool(bool),
    Object(ObjectValue),
}

impl Value {
    pub fn null(ty: impl Into<AttrType>) -> Self {
        Self::Null(ty.into())
    }

    pub fn unknown(ty: impl Into<AttrType>) -> Self {
        Self::Unknown(ty.into())
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// The type of this value.
    pub fn ty(&self) -> AttrType {
        match self {
            Self::Null(ty) | Self::Unknown(ty) => ty.clone(),
            Self::String(_) => AttrType::String,
            Self::Number(_) => AttrType::Number,
            Self::Bool(_) => AttrType::Bool,
            Self::Object(obj) => AttrType::Object(obj.ty().clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Returns `true` if the value is neither null nor unknown.
    pub fn is_known(&self) -> bool {
        !self.is_null() && !self.is_unknown()
    }

    /// The known object, if this is one.
    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns `true` only if this is a known string equal to `s`.
    pub fn eq_str(&self, s: &str) -> bool {
        self.as_str() == Some(s)
    }

    /// Decode a plain JSON document under `ty`.
    ///
    /// `null` decodes to [`Value::Null`] and [`UNKNOWN_VALUE`] to
    /// [`Value::Unknown`], whatever `ty` is. Object members missing from the
    /// document are left absent.
    pub fn from_json(json: &Json, ty: &AttrType) -> Result<Self, TypeError> {
        match (ty, json) {
            (_, Json::Null) => Ok(Self::Null(ty.clone())),
            (_, Json::String(s)) if s == UNKNOWN_VALUE => Ok(Self::Unknown(ty.clone())),
            (AttrType::String, Json::String(s)) => Ok(Self::String(s.clone())),
            (AttrType::Number, Json::Number(n)) => Ok(Self::Number(n.clone())),
            (AttrType::Bool, Json::Bool(b)) => Ok(Self::Bool(*b)),
            (AttrType::Object(object_type), Json::Object(members)) => {
                let mut attributes = BTreeMap::new();
                for (name, member) in members {
                    let attr_ty = object_type
                        .get(name)
                        .ok_or_else(|| TypeError::UnexpectedAttribute { name: name.clone() })?;
                    attributes.insert(name.clone(), Self::from_json(member, attr_ty)?);
                }
                Ok(Self::Object(ObjectValue::new(object_type.clone(), attributes)?))
            }
            (_, other) => Err(TypeError::ValueMismatch {
                expected: ty.to_string(),
                actual: json_kind(other).into(),
            }),
        }
    }

    /// Encode as plain JSON. Unknowns become [`UNKNOWN_VALUE`].
    pub fn to_json(&self) -> Json {
        match self {
            Self::Null(_) => Json::Null,
            Self::Unknown(_) => Json::String(UNKNOWN_VALUE.into()),
            Self::String(s) => Json::String(s.clone()),
            Self::Number(n) => Json::Number(n.clone()),
            Self::Bool(b) => Json::Bool(*b),
            Self::Object(obj) => Json::Object(
                obj.attributes()
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null(_) => f.write_str("<null>"),
            Self::Unknown(_) => f.write_str("<unknown>"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Object(obj) => write!(f, "{obj}"),
        }
    }
}

impl From<ObjectValue> for Value {
    fn from(obj: ObjectValue) -> Self {
        Self::Object(obj)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr_type::ObjectType;
    use serde_json::json;

    fn topic_type() -> AttrType {
        AttrType::Object(ObjectType::from_pairs([
            ("name", AttrType::String),
            ("partitions", AttrType::Number),
            ("persistent", AttrType::Bool),
        ]))
    }

    #[test]
    fn null_and_unknown_are_distinct() {
        let null = Value::null(AttrType::String);
        let unknown = Value::unknown(AttrType::String);
        assert_ne!(null, unknown);
        assert!(null.is_null() && !null.is_known());
        assert!(unknown.is_unknown() && !unknown.is_known());
    }

    #[test]
    fn null_keeps_its_type() {
        let ty = topic_type();
        assert_eq!(Value::Null(ty.clone()).ty(), ty);
    }

    #[test]
    fn eq_str_only_matches_known_strings() {
        assert!(Value::from("persistent").eq_str("persistent"));
        assert!(!Value::from("persistent").eq_str("non-persistent"));
        assert!(!Value::null(AttrType::String).eq_str(""));
        assert!(!Value::from(true).eq_str("true"));
    }

    #[test]
    fn decodes_object_document() {
        let json = json!({"name": "orders", "partitions": 4, "persistent": null});
        let value = Value::from_json(&json, &topic_type()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.get("name").unwrap().eq_str("orders"));
        assert_eq!(obj.get("partitions"), Some(&Value::from(4)));
        assert_eq!(obj.get("persistent"), Some(&Value::null(AttrType::Bool)));
    }

    #[test]
    fn decodes_unknown_sentinel() {
        let json = json!({"name": UNKNOWN_VALUE});
        let value = Value::from_json(&json, &topic_type()).unwrap();
        let name = value.as_object().unwrap().get("name").unwrap();
        assert_eq!(name, &Value::unknown(AttrType::String));
        assert_eq!(value.to_json(), json);
    }

    #[test]
    fn missing_members_stay_absent() {
        let value = Value::from_json(&json!({"name": "orders"}), &topic_type()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.get("partitions").is_none());
    }

    #[test]
    fn rejects_kind_mismatch() {
        let err = Value::from_json(&json!({"partitions": "four"}), &topic_type()).unwrap_err();
        assert_eq!(
            err,
            TypeError::ValueMismatch {
                expected: "number".into(),
                actual: "string".into(),
            }
        );
    }

    #[test]
    fn rejects_undeclared_member() {
        let err = Value::from_json(&json!({"retention": 1}), &topic_type()).unwrap_err();
        assert_eq!(err, TypeError::UnexpectedAttribute { name: "retention".into() });
    }

    #[test]
    fn display_formats() {
        assert_eq!(Value::null(AttrType::Bool).to_string(), "<null>");
        assert_eq!(Value::unknown(AttrType::Bool).to_string(), "<unknown>");
        assert_eq!(Value::from("a").to_string(), "\"a\"");
        assert_eq!(Value::from(7).to_string(), "7");
    }
}
