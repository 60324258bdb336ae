//! Ambient plumbing shared by Stockroom services: configuration loading,
//! tracing setup, database connection and per-operation context.

pub mod config;
pub mod context;
pub mod db;
pub mod or_panic;
pub mod tracing;
