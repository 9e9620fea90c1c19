pub mod config;
pub mod network;
pub mod ops;
pub mod outcome;
