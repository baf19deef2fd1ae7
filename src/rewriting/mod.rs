//! Term rewriting modules.
//!
//! Leaves first: matching and instantiation, rules and where they apply, then the
//! searches that chain rule applications into proof traces.

pub mod applier;
pub mod evaluation;
pub mod instantiation;
pub mod matching;
pub mod proof;
pub mod random;
pub mod rule;
pub mod sequential;
pub mod system;
