pub mod classify;
pub mod end;
pub mod pool;
pub mod sequence;
pub mod tileset;
