pub mod ao;
pub mod math;
pub mod processing;
pub mod types;
