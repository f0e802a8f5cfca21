pub mod checkout;
pub mod pages;

pub use checkout::checkout_config;
pub use pages::pages_config;
