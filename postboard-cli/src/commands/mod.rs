//! Command implementations for the postboard CLI

pub mod serve;

pub use serve::run_serve;
