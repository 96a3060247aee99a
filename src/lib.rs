pub mod config;
pub mod convert;
pub mod shell;
pub mod units;
