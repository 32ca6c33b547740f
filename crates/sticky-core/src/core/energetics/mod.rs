pub mod nearest_neighbor;

use crate::core::models::pool::EndPool;
use crate::core::models::sequence::DnaSequence;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnergeticsError {
    #[error("Energetics model '{model}' failed: {message}")]
    ModelFailure { model: &'static str, message: String },
}

/// The four strand-orientation combinations of a binding pair: each side is
/// read either as the sequence itself or as its structural complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairKind {
    SelfSelf,
    SelfComp,
    CompSelf,
    CompComp,
}

impl PairKind {
    pub const ALL: [PairKind; 4] = [
        PairKind::SelfSelf,
        PairKind::SelfComp,
        PairKind::CompSelf,
        PairKind::CompComp,
    ];

    /// Kind implied by the complement flags on the two sides of a pair.
    pub fn from_sides(a_is_complement: bool, b_is_complement: bool) -> Self {
        match (a_is_complement, b_is_complement) {
            (false, false) => PairKind::SelfSelf,
            (false, true) => PairKind::SelfComp,
            (true, false) => PairKind::CompSelf,
            (true, true) => PairKind::CompComp,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PairKind::SelfSelf => 0,
            PairKind::SelfComp => 1,
            PairKind::CompSelf => 2,
            PairKind::CompComp => 3,
        }
    }

    pub(crate) fn sides(&self) -> (bool, bool) {
        match self {
            PairKind::SelfSelf => (false, false),
            PairKind::SelfComp => (false, true),
            PairKind::CompSelf => (true, false),
            PairKind::CompComp => (true, true),
        }
    }
}

/// A thermodynamic model predicting binding free energies between sticky-end
/// sequences. Implementations must be pure functions of their inputs; the
/// engine memoizes results indefinitely.
pub trait EnergeticsModel {
    /// Predicted binding free energy (kcal/mol, negative = binding) between
    /// two sequences, each side read per `kind`.
    fn binding_energy(
        &self,
        a: &DnaSequence,
        b: &DnaSequence,
        kind: PairKind,
    ) -> Result<f64, EnergeticsError>;

    /// Energies of each end in the pool bound to its intended complement.
    /// The mean of these is the calibration baseline for the score scale.
    fn matching_energies(&self, pool: &EndPool) -> Result<Vec<f64>, EnergeticsError> {
        pool.sequences()
            .iter()
            .map(|seq| self.binding_energy(seq, seq, PairKind::SelfComp))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_kind_from_sides_covers_all_combinations() {
        for kind in PairKind::ALL {
            let (a, b) = kind.sides();
            assert_eq!(PairKind::from_sides(a, b), kind);
        }
    }

    #[test]
    fn pair_kind_indices_are_distinct() {
        let indices: Vec<usize> = PairKind::ALL.iter().map(|k| k.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
