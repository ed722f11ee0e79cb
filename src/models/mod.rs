pub mod comparison;
pub mod quote;
pub mod response;

pub use comparison::*;
pub use quote::*;
pub use response::*;
