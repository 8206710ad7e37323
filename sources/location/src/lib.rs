pub mod error;
pub mod resolver;
pub mod unit;

pub use error::{InvalidLocationError, NullUnitError};
pub use resolver::{ClassLocation, ResolvedLocation};
pub use unit::CodeUnit;
