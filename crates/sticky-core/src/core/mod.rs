pub mod energetics;
pub mod models;
