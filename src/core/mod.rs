pub mod aggregate;
pub mod calculator;
pub mod clear;
pub mod configuration;
pub mod journal;
pub mod notify;
pub mod report;
pub mod session;
