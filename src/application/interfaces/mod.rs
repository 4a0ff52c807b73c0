/// Currency service interface
pub mod currency;
/// Product service interface
pub mod product;
