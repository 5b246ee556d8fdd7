pub mod quote;
pub mod quote_set;

pub use quote::*;
pub use quote_set::*;
