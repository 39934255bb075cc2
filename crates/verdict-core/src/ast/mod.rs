//! Rule AST (Abstract Syntax Tree) definitions
//!
//! Rules are plain data: a typed condition over one fact plus an ordered
//! list of actions. Rule-sets group rules under a name.

pub mod action;
pub mod condition;
pub mod rule;
pub mod ruleset;
pub mod template;

pub use action::Action;
pub use condition::Condition;
pub use rule::{Rule, RuleCategory};
pub use ruleset::RuleSet;
pub use template::{Segment, Template};
