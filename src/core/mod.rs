pub mod logic;
pub mod metrics;
pub mod recommend;
