pub mod load;
pub mod report;
pub mod week;
