use tracing::debug;

use tfsync_types::ObjectValue;

/// Attribute that guards a resource against deletion.
pub const DELETION_PROTECTION: &str = "deletion_protection";

/// Returns `true` if the resource has `deletion_protection` set to `true`.
///
/// An absent, null, or unknown flag reads as unprotected, matching the
/// attribute's default of `false`.
pub fn protected_from_delete(resource: &ObjectValue) -> bool {
    match resource.get(DELETION_PROTECTION) {
        Some(value) => match value.as_bool() {
            Some(protected) => protected,
            None => {
                debug!(value = %value, "deletion_protection is not a known bool");
                false
            }
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfsync_types::{AttrType, ObjectType, Value};

    fn tenant_type() -> ObjectType {
        ObjectType::from_pairs([
            ("name", AttrType::String),
            (DELETION_PROTECTION, AttrType::Bool),
        ])
    }

    fn tenant(flag: Option<Value>) -> ObjectValue {
        let obj = ObjectValue::from_pairs(tenant_type(), [("name", Value::from("acme"))]).unwrap();
        match flag {
            Some(value) => obj.with_attr(DELETION_PROTECTION, value).unwrap(),
            None => obj,
        }
    }

    #[test]
    fn true_flag_protects() {
        assert!(protected_from_delete(&tenant(Some(Value::from(true)))));
    }

    #[test]
    fn false_flag_does_not_protect() {
        assert!(!protected_from_delete(&tenant(Some(Value::from(false)))));
    }

    #[test]
    fn unset_flag_does_not_protect() {
        assert!(!protected_from_delete(&tenant(None)));
        assert!(!protected_from_delete(&tenant(Some(Value::null(AttrType::Bool)))));
        assert!(!protected_from_delete(&tenant(Some(Value::unknown(AttrType::Bool)))));
    }
}
