//! Attribute type descriptors.
//!
//! Types serialize using Terraform's JSON type-constraint encoding:
//! primitives are bare strings (`"string"`, `"number"`, `"bool"`) and objects
//! are a two-element array `["object", {"name": <type>, ...}]`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::error::TypeError;

/// The type of a single attribute value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Json", into = "Json")]
pub enum AttrType {
    String,
    Number,
    Bool,
    Object(ObjectType),
}

impl AttrType {
    /// Returns `true` for `string`, `number`, and `bool`.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Self::Object(_))
    }

    /// The object type, if this is one.
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(ty) => Some(ty),
            _ => None,
        }
    }

    /// Decode from Terraform's JSON type encoding.
    pub fn from_json(json: &Json) -> Result<Self, TypeError> {
        match json {
            Json::String(s) => match s.as_str() {
                "string" => Ok(Self::String),
                "number" => Ok(Self::Number),
                "bool" => Ok(Self::Bool),
                other => Err(TypeError::InvalidTypeJson(format!(
                    "unsupported primitive type `{other}`"
                ))),
            },
            Json::Array(parts) => match parts.as_slice() {
                [Json::String(kind), Json::Object(attrs)] if kind == "object" => {
                    let mut attribute_types = BTreeMap::new();
                    for (name, ty) in attrs {
                        attribute_types.insert(name.clone(), Self::from_json(ty)?);
                    }
                    Ok(Self::Object(ObjectType::new(attribute_types)))
                }
                [Json::String(kind), ..] => Err(TypeError::InvalidTypeJson(format!(
                    "unsupported type constructor `{kind}`"
                ))),
                _ => Err(TypeError::InvalidTypeJson(
                    "type constructor must be [\"<kind>\", <argument>]".into(),
                )),
            },
            other => Err(TypeError::InvalidTypeJson(format!(
                "expected a string or array, got {other}"
            ))),
        }
    }

    /// Encode using Terraform's JSON type encoding.
    pub fn to_json(&self) -> Json {
        match self {
            Self::String => Json::String("string".into()),
            Self::Number => Json::String("number".into()),
            Self::Bool => Json::String("bool".into()),
            Self::Object(ty) => ty.to_json(),
        }
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
            Self::Bool => f.write_str("bool"),
            Self::Object(ty) => write!(f, "{ty}"),
        }
    }
}

impl TryFrom<Json> for AttrType {
    type Error = TypeError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        Self::from_json(&json)
    }
}

impl From<AttrType> for Json {
    fn from(ty: AttrType) -> Self {
        ty.to_json()
    }
}

impl From<ObjectType> for AttrType {
    fn from(ty: ObjectType) -> Self {
        Self::Object(ty)
    }
}

/// The type of an object: attribute names mapped to their types.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Json", into = "Json")]
pub struct ObjectType {
    attribute_types: BTreeMap<String, AttrType>,
}

impl ObjectType {
    pub fn new(attribute_types: BTreeMap<String, AttrType>) -> Self {
        Self { attribute_types }
    }

    /// Build an object type from `(name, type)` pairs.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, AttrType)>,
        K: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn attribute_types(&self) -> &BTreeMap<String, AttrType> {
        &self.attribute_types
    }

    /// The declared type of `name`, if any.
    pub fn get(&self, name: &str) -> Option<&AttrType> {
        self.attribute_types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attribute_types.contains_key(name)
    }

    /// Returns `true` if no attributes are declared.
    pub fn is_empty(&self) -> bool {
        self.attribute_types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attribute_types.len()
    }

    pub fn to_json(&self) -> Json {
        let attrs = self
            .attribute_types
            .iter()
            .map(|(name, ty)| (name.clone(), ty.to_json()))
            .collect();
        Json::Array(vec![Json::String("object".into()), Json::Object(attrs)])
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("object({")?;
        for (i, (name, ty)) in self.attribute_types.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={ty}")?;
        }
        f.write_str("})")
    }
}

impl TryFrom<Json> for ObjectType {
    type Error = TypeError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        match AttrType::from_json(&json)? {
            AttrType::Object(ty) => Ok(ty),
            other => Err(TypeError::InvalidTypeJson(format!(
                "expected an object type, got {other}"
            ))),
        }
    }
}

impl From<ObjectType> for Json {
    fn from(ty: ObjectType) -> Self {
        ty.to_json()
    }
}
