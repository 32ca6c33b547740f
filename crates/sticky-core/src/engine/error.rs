use thiserror::Error;

use crate::core::energetics::EnergeticsError;
use crate::core::models::tileset::TileSetError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Tile-set document error: {source}")]
    TileSet {
        #[from]
        source: TileSetError,
    },

    #[error("Energetics model failed: {source}")]
    Energetics {
        #[from]
        source: EnergeticsError,
    },

    #[error("No energetics model supplied")]
    NoEnergeticsModel,

    #[error("Nothing to optimize: no mutable ends in either orientation class")]
    NothingToOptimize,

    #[error("Unknown end '{0}' in configuration")]
    UnknownEnd(String),

    #[error("Energy cache index {index} out of range for class of size {size}")]
    SlotOutOfRange { index: usize, size: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
