pub mod config;
pub mod date;
pub mod error;
pub mod handler;
pub mod model;
pub mod reconcile;
pub mod stats;
