pub mod initialize;
pub mod journal;
pub mod options;
pub mod pool;
pub mod queries;
pub mod stats;
