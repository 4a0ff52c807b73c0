/// Envelope and types shared by every resource
pub mod common;
/// Currency resource models
pub mod currency;
/// Product resource models
pub mod product;

pub use common::*;
pub use currency::*;
pub use product::*;
