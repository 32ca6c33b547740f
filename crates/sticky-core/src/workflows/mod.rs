pub mod reorder;
