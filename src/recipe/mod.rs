pub mod conversion;
pub mod definition;
pub mod difficulty;

pub use conversion::*;
pub use definition::*;
pub use difficulty::*;
