use std::collections::BTreeMap;
use std::fmt;

use crate::attr_type::ObjectType;
use crate::error::TypeError;
use crate::value::Value;

/// A known object value.
///
/// Every held attribute is declared by the object's type and matches the
/// declared attribute type. Declared attributes may be absent; absence is
/// distinct from holding a null.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectValue {
    ty: ObjectType,
    attributes: BTreeMap<String, Value>,
}

impl ObjectValue {
    /// Build an object, checking each attribute against `ty`.
    pub fn new(ty: ObjectType, attributes: BTreeMap<String, Value>) -> Result<Self, TypeError> {
        for (name, value) in &attributes {
            check_attribute(&ty, name, value)?;
        }
        Ok(Self { ty, attributes })
    }

    /// Build an object from `(name, value)` pairs.
    pub fn from_pairs<I, K>(ty: ObjectType, pairs: I) -> Result<Self, TypeError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self::new(ty, pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// An object of type `ty` holding no attributes.
    pub fn empty(ty: ObjectType) -> Self {
        Self {
            ty,
            attributes: BTreeMap::new(),
        }
    }

    pub fn ty(&self) -> &ObjectType {
        &self.ty
    }

    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    pub fn into_attributes(self) -> BTreeMap<String, Value> {
        self.attributes
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// A copy of this object with `name` set to `value`.
    pub fn with_attr(&self, name: impl Into<String>, value: Value) -> Result<Self, TypeError> {
        let name = name.into();
        check_attribute(&self.ty, &name, &value)?;
        let mut attributes = self.attributes.clone();
        attributes.insert(name, value);
        Ok(Self {
            ty: self.ty.clone(),
            attributes,
        })
    }
}

fn check_attribute(ty: &ObjectType, name: &str, value: &Value) -> Result<(), TypeError> {
    let declared = ty.get(name).ok_or_else(|| TypeError::UnexpectedAttribute {
        name: name.to_string(),
    })?;
    let actual = value.ty();
    if actual != *declared {
        return Err(TypeError::AttributeMismatch {
            name: name.to_string(),
            expected: declared.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.attributes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name:?}: {value}")?;
        }
        f.write_str("}")
    }
}
