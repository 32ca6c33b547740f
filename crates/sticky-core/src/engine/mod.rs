pub mod anneal;
pub mod cache;
pub mod calibrate;
pub mod config;
pub mod error;
pub mod mutate;
pub mod progress;
pub mod scoring;
pub mod state;
