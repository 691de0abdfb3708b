//! Recursive object merge.
//!
//! Used to recover from partially-applied remote configuration. When a
//! resource was created but some of its nested settings failed to apply, the
//! state read back from the remote is merged over the last-known state so
//! that settings which already took effect survive, while the gaps are filled
//! from the fresh observation. The user can then fix the configuration and
//! retry without losing prior progress.

use std::collections::BTreeMap;

use tracing::debug;

use tfsync_types::{AttrType, Diagnostics, ObjectType, ObjectValue, Value};

/// The result of [`merge_objects`]: the merged value and every diagnostic
/// collected along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The merged object, or the untouched old value if the merge was aborted.
    pub value: Value,
    /// Warnings and errors in the order they were produced.
    pub diagnostics: Diagnostics,
}

impl MergeOutcome {
    pub fn new(value: Value, diagnostics: Diagnostics) -> Self {
        Self { value, diagnostics }
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_error(&self) -> bool {
        self.diagnostics.has_error()
    }

    /// Returns `true` if the merge produced no diagnostics at all.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_parts(self) -> (Value, Diagnostics) {
        (self.value, self.diagnostics)
    }
}

/// Merge `new` into `old` under `schema`.
///
/// Attributes of `new` drive the merge; an attribute missing from `new` is
/// missing from the result even if `old` knows it. For each attribute:
///
/// - if `old` lacks it, or holds null or unknown, the value from `new` is used;
/// - if `old` holds an object, the two objects are merged recursively using
///   the nested type from `schema`;
/// - otherwise the known value from `old` is kept.
///
/// An object in `old` facing anything but a known object in `new` (a
/// primitive, null, or unknown), or an attribute without an object type in
/// `schema`, is reported as a warning and the attribute is left out of the
/// result. Any error, including one from a nested merge, aborts the whole
/// merge and returns `old` unchanged.
///
/// An empty `schema` means no type information was supplied: `old` is
/// returned with a warning. Nested object types declaring no attributes are
/// valid and merged normally.
pub fn merge_objects(old: &Value, new: &Value, schema: &ObjectType) -> MergeOutcome {
    if schema.is_empty() {
        let mut diags = Diagnostics::new();
        diags.add_warning(
            "Failed to merge state objects",
            format!("No type information provided for object: {old}"),
        );
        return MergeOutcome::new(old.clone(), diags);
    }
    merge_with_schema(old, new, schema)
}

fn merge_with_schema(old: &Value, new: &Value, schema: &ObjectType) -> MergeOutcome {
    let mut diags = Diagnostics::new();

    let old_obj = match old {
        Value::Null(_) | Value::Unknown(_) => return adopt_new(old, new, schema),
        Value::Object(obj) => obj,
        other => {
            diags.add_error(
                "Failed to merge state objects",
                format!("Existing state is not an object: `{}`", other.ty()),
            );
            return MergeOutcome::new(old.clone(), diags);
        }
    };

    let new_attributes = match new {
        Value::Object(obj) => Some(obj.attributes()),
        Value::Null(_) | Value::Unknown(_) => None,
        other => {
            diags.add_error(
                "Failed to merge state objects",
                format!("New state is not an object: `{}`", other.ty()),
            );
            return MergeOutcome::new(old.clone(), diags);
        }
    };

    let mut attributes = BTreeMap::new();
    for (name, new_value) in new_attributes.into_iter().flatten() {
        let old_value = match old_obj.get(name) {
            Some(value) if value.is_known() => value,
            _ => {
                attributes.insert(name.clone(), new_value.clone());
                continue;
            }
        };

        if !matches!(old_value, Value::Object(_)) {
            attributes.insert(name.clone(), old_value.clone());
            continue;
        }

        if !matches!(new_value, Value::Object(_)) {
            let replacement = describe(new_value);
            debug!(attribute = %name, new_value = %replacement, "dropping attribute with non matching type");
            diags.add_warning(
                format!("Non matching types for attribute: {name}"),
                format!("Existing object attribute can't be replaced with {replacement}"),
            );
            continue;
        }

        let Some(nested_schema) = schema.get(name).and_then(AttrType::as_object) else {
            debug!(attribute = %name, "dropping attribute without object type information");
            diags.add_warning(
                format!("Missing type information for attribute {name}"),
                "No type information found when merging objects",
            );
            continue;
        };

        let nested = merge_with_schema(old_value, new_value, nested_schema);
        diags.append(nested.diagnostics);
        if diags.has_error() {
            debug!(attribute = %name, "nested merge failed; keeping existing state");
            return MergeOutcome::new(old.clone(), diags);
        }
        attributes.insert(name.clone(), nested.value);
    }

    build(old, schema, attributes, diags)
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null(ty) => format!("null of type `{ty}`"),
        Value::Unknown(ty) => format!("unknown of type `{ty}`"),
        other => format!("type `{}`", other.ty()),
    }
}

/// `old` holds nothing worth keeping, so the result is `new` under `schema`.
fn adopt_new(old: &Value, new: &Value, schema: &ObjectType) -> MergeOutcome {
    let ty = AttrType::Object(schema.clone());
    match new {
        Value::Null(_) => MergeOutcome::new(Value::Null(ty), Diagnostics::new()),
        Value::Unknown(_) => MergeOutcome::new(Value::Unknown(ty), Diagnostics::new()),
        Value::Object(obj) => build(old, schema, obj.attributes().clone(), Diagnostics::new()),
        other => {
            let mut diags = Diagnostics::new();
            diags.add_error(
                "Failed to merge state objects",
                format!("New state is not an object: `{}`", other.ty()),
            );
            MergeOutcome::new(old.clone(), diags)
        }
    }
}

fn build(
    old: &Value,
    schema: &ObjectType,
    attributes: BTreeMap<String, Value>,
    mut diags: Diagnostics,
) -> MergeOutcome {
    match ObjectValue::new(schema.clone(), attributes) {
        Ok(obj) => MergeOutcome::new(Value::Object(obj), diags),
        Err(err) => {
            debug!(error = %err, "merged attributes do not fit the schema");
            diags.add_error("Failed to build merged object", err.to_string());
            MergeOutcome::new(old.clone(), diags)
        }
    }
}
