pub mod fairness;
pub use fairness::*;
