pub mod checkout_service;
pub mod verification_service;

pub use checkout_service::*;
pub use verification_service::*;
