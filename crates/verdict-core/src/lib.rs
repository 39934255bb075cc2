//! Verdict Core - Core types and definitions for the Verdict decision service
//!
//! This crate provides the fundamental types used across the Verdict workspace:
//! - Value types for fact fields
//! - Fact definitions (Business records and declared generic records)
//! - Rule AST (rules, rule-sets, conditions, actions, templates)
//! - Reasons attached to a decision
//! - Error types

pub mod ast;
pub mod error;
pub mod fact;
pub mod reason;
pub mod types;

// Re-export commonly used types
pub use ast::{Action, Condition, Rule, RuleCategory, RuleSet, Template};
pub use error::CoreError;
pub use fact::{Business, Fact, Record};
pub use reason::Reason;
pub use types::Value;
