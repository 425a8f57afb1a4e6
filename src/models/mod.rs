pub mod envelope;
pub mod quote;
pub mod series;

pub use envelope::*;
pub use quote::*;
pub use series::*;
