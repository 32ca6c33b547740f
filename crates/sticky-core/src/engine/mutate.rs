use super::error::EngineError;
use super::state::AssignmentState;
use crate::core::models::end::EndClass;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

/// A proposed perturbation: swap the assignments of two slots within one
/// orientation class. `a == b` is a legal, observable no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub class: EndClass,
    pub a: usize,
    pub b: usize,
}

impl Move {
    pub fn apply(&self, state: &mut AssignmentState) {
        state.swap(self.class, self.a, self.b);
    }

    /// A swap undoes itself, so applying the same move again restores the
    /// previous state. The annealer relies on this for cheap rejection.
    pub fn undo(&self, state: &mut AssignmentState) {
        self.apply(state);
    }
}

/// Proposes local perturbations for the annealer. The class is chosen with
/// probability proportional to its mutable-slot count, so a class with no
/// mutable slots is never picked; the two slots are drawn uniformly with
/// replacement from the chosen class's mutable set.
pub struct MutationOperator {
    mutable_td: Vec<usize>,
    mutable_dt: Vec<usize>,
    class_weights: WeightedIndex<usize>,
}

impl MutationOperator {
    pub fn new(mutable_td: Vec<usize>, mutable_dt: Vec<usize>) -> Result<Self, EngineError> {
        // Both classes empty means there is no move to make at all; the
        // weighted distribution rejects an all-zero weight vector.
        let class_weights = WeightedIndex::new([mutable_td.len(), mutable_dt.len()])
            .map_err(|_| EngineError::NothingToOptimize)?;
        Ok(Self {
            mutable_td,
            mutable_dt,
            class_weights,
        })
    }

    pub fn mutable_count(&self, class: EndClass) -> usize {
        match class {
            EndClass::Td => self.mutable_td.len(),
            EndClass::Dt => self.mutable_dt.len(),
        }
    }

    pub fn propose(&self, rng: &mut impl Rng) -> Move {
        let (class, slots) = match self.class_weights.sample(rng) {
            0 => (EndClass::Td, &self.mutable_td),
            _ => (EndClass::Dt, &self.mutable_dt),
        };
        let a = slots[rng.gen_range(0..slots.len())];
        let b = slots[rng.gen_range(0..slots.len())];
        Move { class, a, b }
    }

    /// Propose and apply in one step; returns the move so the caller can
    /// undo it on rejection.
    pub fn mutate(&self, state: &mut AssignmentState, rng: &mut impl Rng) -> Move {
        let mv = self.propose(rng);
        mv.apply(state);
        mv
    }
}
