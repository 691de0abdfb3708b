//! Resource helpers for tfsync.
//!
//! Small, stateless helpers shared by resource implementations.
//!
//! # Key Items
//!
//! - [`key_from_strings`] — Order-insensitive SHA-256 key for a string set
//! - [`ignore_case`] — Diff suppressor for case-insensitive attributes
//! - [`protected_from_delete`] — Reads the `deletion_protection` flag
//! - [`check_required_test_vars`] / [`require_test_vars!`] — Acceptance-test gating

pub mod keys;
pub mod protection;
pub mod suppress;
pub mod testing;

pub use keys::key_from_strings;
pub use protection::{protected_from_delete, DELETION_PROTECTION};
pub use suppress::ignore_case;
pub use testing::{check_required_test_vars, missing_test_var};
