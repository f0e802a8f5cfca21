pub mod common;
pub mod feedback;
pub mod plan;
pub mod session;
pub mod transaction;
pub mod video;

pub use common::*;
pub use feedback::*;
pub use plan::*;
pub use session::*;
pub use transaction::*;
pub use video::*;
