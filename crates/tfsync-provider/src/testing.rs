//! Gating for acceptance tests that need a live cluster.
//!
//! Acceptance tests read endpoints and credentials from the environment.
//! When a required variable is missing the test is skipped rather than
//! failed:
//!
//! ```
//! use tfsync_provider::require_test_vars;
//!
//! fn acceptance_namespace() {
//!     require_test_vars!("WEB_SERVICE_URL", "PULSAR_TOKEN");
//!     // talk to the cluster
//! }
//! # acceptance_namespace();
//! ```

use std::env;

/// Reason reported for the first variable in `vars` that is unset or blank.
///
/// `lookup` resolves a variable name to its value.
pub fn missing_test_var<F>(vars: &[&str], lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    vars.iter()
        .find(|var| lookup(var).map_or(true, |value| value.trim().is_empty()))
        .map(|var| format!("skipping test due to missing {var} environment variable"))
}

/// [`missing_test_var`] against the process environment.
pub fn check_required_test_vars(vars: &[&str]) -> Option<String> {
    missing_test_var(vars, |name| env::var(name).ok())
}

/// Return early from the enclosing test when any of the given environment
/// variables is unset or blank.
#[macro_export]
macro_rules! require_test_vars {
    ($($var:expr),+ $(,)?) => {
        if let Some(reason) = $crate::check_required_test_vars(&[$($var),+]) {
            eprintln!("{reason}");
            return;
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn all_present_is_none() {
        let lookup = lookup_in(&[("WEB_SERVICE_URL", "http://localhost:8080"), ("TOKEN", "t")]);
        assert_eq!(missing_test_var(&["WEB_SERVICE_URL", "TOKEN"], lookup), None);
    }

    #[test]
    fn unset_var_is_reported() {
        let lookup = lookup_in(&[("WEB_SERVICE_URL", "http://localhost:8080")]);
        assert_eq!(
            missing_test_var(&["WEB_SERVICE_URL", "TOKEN"], lookup),
            Some("skipping test due to missing TOKEN environment variable".into())
        );
    }

    #[test]
    fn blank_var_counts_as_missing() {
        let lookup = lookup_in(&[("TOKEN", "   ")]);
        assert!(missing_test_var(&["TOKEN"], lookup).is_some());
    }

    #[test]
    fn first_missing_var_wins() {
        let lookup = lookup_in(&[]);
        let reason = missing_test_var(&["FIRST", "SECOND"], lookup).unwrap();
        assert!(reason.contains("FIRST"));
    }

    #[test]
    fn macro_returns_early_when_missing() {
        fn gated(reached: &mut bool) {
            require_test_vars!("TFSYNC_TEST_VAR_THAT_IS_NEVER_SET");
            *reached = true;
        }
        let mut reached = false;
        gated(&mut reached);
        assert!(!reached);
    }
}
