pub mod dates;
pub mod normalize;

pub use normalize::TextNormalizer;
