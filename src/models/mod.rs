pub mod data;
pub mod rules;

pub use data::*;
pub use rules::NormalizationRule;
