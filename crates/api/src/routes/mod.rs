pub mod audit;
pub mod entities;
pub mod pm;
pub mod risk;
