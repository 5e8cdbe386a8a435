pub mod equality;
pub mod reference;

pub use equality::{EqualityProblem, Problem};
