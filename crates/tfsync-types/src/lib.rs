//! Foundation types for tfsync.
//!
//! This crate provides the typed value model used to reconcile Terraform
//! resource state. Every other tfsync crate depends on `tfsync-types`.
//!
//! # Key Types
//!
//! - [`AttrType`] / [`ObjectType`] — Type descriptors for attribute values
//! - [`Value`] — A typed value that may be null, unknown, a primitive, or an object
//! - [`ObjectValue`] — A known object whose attributes are checked against its type
//! - [`Diagnostic`] / [`Diagnostics`] — Accumulated warnings and errors

pub mod attr_type;
pub mod diag;
pub mod error;
pub mod object;
pub mod value;

pub use attr_type::{AttrType, ObjectType};
pub use diag::{Diagnostic, Diagnostics, Severity};
pub use error::TypeError;
pub use object::ObjectValue;
pub use value::{Value, UNKNOWN_VALUE};
