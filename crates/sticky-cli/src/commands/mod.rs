pub mod reorder;
pub mod score;
