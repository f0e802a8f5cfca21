pub mod format;
pub mod token;

pub use format::*;
pub use token::*;
