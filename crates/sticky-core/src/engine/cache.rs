use super::error::EngineError;
use crate::core::energetics::{EnergeticsModel, PairKind};
use crate::core::models::end::EndClass;
use crate::core::models::pool::EndPool;

/// Memoized pairwise binding energies for one orientation class under one
/// energetics model: four square matrices, one per strand-orientation kind,
/// filled lazily on first access and never invalidated (the underlying
/// sequence pool is immutable).
///
/// Indices are base-pool positions, not state-permuted slots; callers
/// translate through the current permutation before querying.
#[derive(Debug, Clone)]
pub struct EnergyCache {
    class: EndClass,
    dim: usize,
    entries: [Vec<Option<f64>>; 4],
}

impl EnergyCache {
    pub fn new(class: EndClass, dim: usize) -> Self {
        Self {
            class,
            dim,
            entries: std::array::from_fn(|_| vec![None; dim * dim]),
        }
    }

    pub fn class(&self) -> EndClass {
        self.class
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(
        &mut self,
        kind: PairKind,
        x: usize,
        y: usize,
        model: &dyn EnergeticsModel,
        pool: &EndPool,
    ) -> Result<f64, EngineError> {
        if x >= self.dim || y >= self.dim {
            return Err(EngineError::SlotOutOfRange {
                index: x.max(y),
                size: self.dim,
            });
        }
        let slot = &mut self.entries[kind.index()][x * self.dim + y];
        if let Some(energy) = *slot {
            return Ok(energy);
        }
        let energy = model.binding_energy(pool.sequence(x), pool.sequence(y), kind)?;
        *slot = Some(energy);
        Ok(energy)
    }
}
