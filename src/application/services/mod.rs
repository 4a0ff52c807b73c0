/// Currency service backed by the client
pub mod currency_service;
/// Product service backed by the client
pub mod product_service;

pub use crate::application::interfaces::currency::*;
pub use crate::application::interfaces::product::*;
