pub mod common;
pub mod comparison;
pub mod osrm;
