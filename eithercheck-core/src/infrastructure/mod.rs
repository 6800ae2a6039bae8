pub mod adapters;
pub mod compiler;
pub mod config;
pub mod error;
