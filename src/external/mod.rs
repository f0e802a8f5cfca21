pub mod stripe;
pub mod supabase;

pub use stripe::*;
pub use supabase::*;
