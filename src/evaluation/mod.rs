//! From-scratch solution checking.

mod evaluator;

pub use evaluator::SolutionAuditor;
