//! Type system for Verdict
//!
//! Fact fields are read and written through the dynamically typed [`Value`].

pub mod value;

pub use value::Value;
