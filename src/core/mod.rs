//! Parsed signature records.

pub mod types;

pub use types::{Argument, MethodSignature};
