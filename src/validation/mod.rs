pub mod birth_date;
pub mod expiry;
pub mod format;
pub mod name;
pub mod script;
pub mod series;

pub use birth_date::BirthDateValidator;
pub use expiry::IssueDateValidator;
pub use format::{IssuerCodeValidator, NumberValidator};
pub use name::NameValidator;
pub use series::SeriesValidator;
