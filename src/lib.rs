pub mod errors;
pub mod executor;
pub mod report;
pub mod runner;
pub mod stats;
pub mod types;
